use super::*;

#[test]
fn flags_line_up_with_named_constants() {
    assert_eq!(Property::CenterPoint.flag(), PropertyId::CENTER_POINT);
    assert_eq!(Property::StrokeLineJoin.flag(), PropertyId::STROKE_LINE_JOIN);
    assert_eq!(Property::TrimOffset.flag(), PropertyId::TRIM_OFFSET);

    let all = Property::ALL
        .into_iter()
        .fold(PropertyId::empty(), |acc, p| acc | p.flag());
    assert_eq!(all, PropertyId::all());
}

#[test]
fn display_lists_names_in_order() {
    let set = PropertyId::OFFSET | PropertyId::SCALE;
    assert_eq!(set.to_string(), "Scale, Offset");
    assert_eq!(PropertyId::empty().to_string(), "");
}
