use serde_json::{json, Value};

/// A complete ticket record as the ticketing backend sends it
pub fn ticket_json(id: &str) -> Value {
    json!({
        "id": id,
        "eventName": "Colombo Music Festival",
        "email": "buyer@example.com",
        "purchaseDate": "2024-03-15T14:30:00Z",
        "price": 3500,
        "used": false,
        "status": "active"
    })
}

/// The same record with one field removed
pub fn ticket_without(id: &str, field: &str) -> Value {
    let mut ticket = ticket_json(id);
    if let Some(obj) = ticket.as_object_mut() {
        obj.remove(field);
    }
    ticket
}

/// The same record with one field replaced
pub fn ticket_with(id: &str, field: &str, value: Value) -> Value {
    let mut ticket = ticket_json(id);
    ticket[field] = value;
    ticket
}
