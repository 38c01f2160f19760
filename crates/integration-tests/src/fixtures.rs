//! JSON payloads shaped like the catalogue API responses.

use serde_json::{Value, json};

/// The single-order response used in the upstream API documentation.
pub const LITERAL_ORDERS: &str = r#"[{"Id":1,"CustomerId":2,"ShippingAddress":{"city":"York","street_name":"Main","street_address":"1 Main St","zip_code":"Y1 1AA","country":"UK"},"Products":[],"DateCreated":"2024-01-01","OrderTotal":0.0,"OrderStatus":1}]"#;

#[must_use]
pub fn address(city: &str) -> Value {
    json!({
        "city": city,
        "street_name": "Sauchiehall Street",
        "street_address": "100 Sauchiehall Street",
        "zip_code": "G2 3DH",
        "country": "Scotland"
    })
}

#[must_use]
pub fn customer(id: i64, first_name: &str, email: &str) -> Value {
    json!({
        "Id": id,
        "first_name": first_name,
        "last_name": "Lovelace",
        "email": email,
        "phone_number": "0141 000 0000",
        "avatar": "https://example.com/avatar.png",
        "address": address("Glasgow"),
        "LoyaltyLevel": 2
    })
}

#[must_use]
pub fn product(sku: &str, title: &str, colour: i64) -> Value {
    json!({
        "SKU_ID": sku,
        "ASN": "ASN-0001",
        "Category": "Electric guitars",
        "Online": true,
        "ItemName": "Les Paul",
        "Title": title,
        "BrandName": "Gibson",
        "Description": "Mahogany body, maple top",
        "ProductDetail": "Burstbucker pickups",
        "SalesPrice": 2499.0,
        "PictureMain": "https://example.com/lp.jpg",
        "QtyInStock": 4,
        "QtyOnOrder": 1,
        "Colour": colour,
        "Pickup": 4,
        "BodyShape": 13,
        "CreatedOn": "2023-03-14"
    })
}

#[must_use]
pub fn order(id: i64, customer_id: i64, status: i64, products: Vec<Value>) -> Value {
    json!({
        "Id": id,
        "CustomerId": customer_id,
        "ShippingAddress": address("Edinburgh"),
        "Products": products,
        "DateCreated": format!("2024-02-{:02}", id.clamp(1, 28)),
        "OrderTotal": 2499.0,
        "OrderStatus": status
    })
}
