//! Product record.

use serde::Serialize;
use serde_json::Value;

use super::{BodyShape, Colour, OpaqueJson, Pickup};
use crate::decode::{DecodeError, FieldReader, FromJson, context_label};

/// A catalogue product, either from `products/` or embedded in an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub sku_id: String,
    pub asn: String,
    pub category: String,
    pub online: bool,
    pub item_name: String,
    pub title: String,
    pub brand_name: String,
    /// Empty when the upstream omits it.
    pub description: String,
    pub product_detail: String,
    pub sales_price: f64,
    pub picture_main: String,
    pub qty_in_stock: i64,
    pub qty_on_order: i64,
    pub colour: Colour,
    pub pickup: Pickup,
    pub body_shape: BodyShape,
    /// Upstream timestamp, kept verbatim.
    pub created_on: String,
    /// Undocumented upstream field, passed through untouched.
    pub image_urls: Option<OpaqueJson>,
}

impl FromJson for Product {
    const CONTEXT: &'static str = "Product";

    fn from_json(value: &Value, parent: Option<&str>) -> Result<Self, DecodeError> {
        let mut r = FieldReader::new(value, context_label(Self::CONTEXT, parent))?;

        let product = Self {
            sku_id: r.require_field("SKU_ID")?,
            asn: r.require_field("ASN")?,
            category: r.require_field("Category")?,
            online: r.require_field("Online")?,
            item_name: r.require_field("ItemName")?,
            title: r.require_field("Title")?,
            brand_name: r.require_field("BrandName")?,
            description: r.get_typed("Description")?.unwrap_or_default(),
            product_detail: r.require_field("ProductDetail")?,
            sales_price: r.require_field("SalesPrice")?,
            picture_main: r.require_field("PictureMain")?,
            qty_in_stock: r.require_field("QtyInStock")?,
            qty_on_order: r.require_field("QtyOnOrder")?,
            colour: r.require_code("Colour")?.map_or(Colour::Unknown, Colour::from_code),
            pickup: r.require_code("Pickup")?.map_or(Pickup::Unknown, Pickup::from_code),
            body_shape: r
                .require_code("BodyShape")?
                .map_or(BodyShape::Unknown, BodyShape::from_code),
            created_on: r.require_field("CreatedOn")?,
            image_urls: r.get_typed("ImageUrls")?,
        };

        r.finish()?;
        Ok(product)
    }
}

impl Product {
    /// Whether any units are in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.qty_in_stock > 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::decode::JsonType;

    fn payload() -> Value {
        json!({
            "SKU_ID": "SKU-1001",
            "ASN": "ASN-77",
            "Category": "Electric Guitars",
            "Online": true,
            "ItemName": "Player Stratocaster",
            "Title": "Fender Player Stratocaster, Sunburst",
            "BrandName": "Fender",
            "Description": "A modern classic.",
            "ProductDetail": "Alder body, maple neck",
            "SalesPrice": 699.0,
            "PictureMain": "https://images.example.com/strat.jpg",
            "QtyInStock": 4,
            "QtyOnOrder": 10,
            "Colour": 3,
            "Pickup": 3,
            "BodyShape": 1,
            "CreatedOn": "2023-05-01T09:00:00",
            "ImageUrls": null
        })
    }

    #[test]
    fn test_decode_product() {
        let product = Product::from_json(&payload(), None).unwrap();
        assert_eq!(product.sku_id, "SKU-1001");
        assert_eq!(product.asn, "ASN-77");
        assert!(product.online);
        assert_eq!(product.brand_name, "Fender");
        assert_eq!(product.description, "A modern classic.");
        assert!((product.sales_price - 699.0).abs() < f64::EPSILON);
        assert_eq!(product.qty_in_stock, 4);
        assert_eq!(product.qty_on_order, 10);
        assert_eq!(product.colour, Colour::Yellow);
        assert_eq!(product.pickup, Pickup::SSS);
        assert_eq!(product.body_shape, BodyShape::SStyle);
        assert_eq!(product.created_on, "2023-05-01T09:00:00");
        assert!(product.image_urls.is_none());
        assert!(product.in_stock());
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("Description");

        let product = Product::from_json(&value, None).unwrap();
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        let mut value = payload();
        value["Colour"] = json!(0);
        value["Pickup"] = json!(99);
        value["BodyShape"] = json!(-5);

        let product = Product::from_json(&value, None).unwrap();
        assert_eq!(product.colour, Colour::Unknown);
        assert_eq!(product.pickup, Pickup::Unknown);
        assert_eq!(product.body_shape, BodyShape::Unknown);
    }

    #[test]
    fn test_codes_beyond_i64_fall_back() {
        let mut value = payload();
        value["Colour"] = json!(u64::MAX);
        value["BodyShape"] = json!(9_223_372_036_854_775_808_u64);

        let product = Product::from_json(&value, None).unwrap();
        assert_eq!(product.colour, Colour::Unknown);
        assert_eq!(product.body_shape, BodyShape::Unknown);
    }

    #[test]
    fn test_quantity_beyond_i64_is_out_of_range() {
        let mut value = payload();
        value["QtyInStock"] = json!(u64::MAX);

        assert!(matches!(
            Product::from_json(&value, None),
            Err(DecodeError::OutOfRange { ref key, .. }) if key == "QtyInStock"
        ));
    }

    #[test]
    fn test_sales_price_as_string_is_type_mismatch() {
        let mut value = payload();
        value["SalesPrice"] = json!("699.00");

        assert_eq!(
            Product::from_json(&value, None).unwrap_err(),
            DecodeError::TypeMismatch {
                context: "Product".to_string(),
                key: "SalesPrice".to_string(),
                actual: JsonType::String,
                expected: JsonType::Float,
            }
        );
    }

    #[test]
    fn test_integral_sales_price_is_type_mismatch() {
        let mut value = payload();
        value["SalesPrice"] = json!(699);

        assert!(matches!(
            Product::from_json(&value, None),
            Err(DecodeError::TypeMismatch {
                actual: JsonType::Integer,
                expected: JsonType::Float,
                ..
            })
        ));
    }

    #[test]
    fn test_colour_code_must_be_integer() {
        let mut value = payload();
        value["Colour"] = json!("Red");

        assert!(matches!(
            Product::from_json(&value, None),
            Err(DecodeError::TypeMismatch { ref key, .. }) if key == "Colour"
        ));
    }

    #[test]
    fn test_missing_colour_is_missing_field() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("Colour");

        assert!(matches!(
            Product::from_json(&value, None),
            Err(DecodeError::MissingField { ref key, .. }) if key == "Colour"
        ));
    }

    #[test]
    fn test_image_urls_passthrough() {
        let mut value = payload();
        value["ImageUrls"] = json!({"front": "a.jpg"});

        let product = Product::from_json(&value, None).unwrap();
        assert_eq!(
            product.image_urls.unwrap().into_inner(),
            json!({"front": "a.jpg"})
        );
    }

    #[test]
    fn test_extra_key_is_unconsumed() {
        let mut value = payload();
        value["Discount"] = json!(0.1);

        assert!(matches!(
            Product::from_json(&value, None),
            Err(DecodeError::UnconsumedFields { ref keys, .. }) if keys == &["Discount".to_string()]
        ));
    }

    #[test]
    fn test_nested_context() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("Title");

        let err = Product::from_json(&value, Some("Order")).unwrap_err();
        assert_eq!(err.context(), "Order:Product");
    }
}
