use crate::writer::Element;

/// One-line outline of an element and its attributes, in table order.
///
/// Values are quoted with `"` escaped; empty values print as a bare name.
pub fn outline_element(element: &Element) -> String {
    let mut line = String::with_capacity(16 + element.len() * 16);
    line.push('<');
    line.push_str(element.name());
    for (name, value) in element.attributes() {
        line.push(' ');
        line.push_str(name);
        if value.is_empty() {
            continue;
        }
        line.push_str(r#"=""#);
        for ch in value.chars() {
            match ch {
                '"' => line.push_str(r#"\""#),
                '\n' => line.push_str(r"\n"),
                _ => line.push(ch),
            }
        }
        line.push('"');
    }
    line.push('>');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::AttributeStore;

    #[test]
    fn outline_lists_attributes_in_order() {
        let mut el = Element::new("div");
        el.set_attribute("unknown", "something").unwrap();
        el.set_attribute("flag", "").unwrap();
        el.set_attribute("quote", "a\"b").unwrap();
        assert_eq!(
            outline_element(&el),
            r#"<div unknown="something" flag quote="a\"b">"#
        );
    }
}
