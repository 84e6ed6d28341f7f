use crate::core::attributes::Attribute;
use crate::core::instance_header::InstanceHeader;

pub fn header_numeric(dimensionality: usize) -> InstanceHeader {
    InstanceHeader::all_numeric(dimensionality)
}

/// One nominal attribute with three values.
pub fn header_single_nominal() -> InstanceHeader {
    InstanceHeader::new(
        "nominal".into(),
        vec![Attribute::nominal(
            "color",
            vec!["red".into(), "green".into(), "blue".into()],
        )],
    )
}

/// numeric, nominal(2), numeric, nominal(3).
pub fn mixed_header() -> InstanceHeader {
    InstanceHeader::new(
        "mixed".into(),
        vec![
            Attribute::numeric("width"),
            Attribute::nominal("shape", vec!["round".into(), "square".into()]),
            Attribute::numeric("height"),
            Attribute::nominal(
                "color",
                vec!["red".into(), "green".into(), "blue".into()],
            ),
        ],
    )
}
