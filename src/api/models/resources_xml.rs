use hard_xml::{ XmlRead, XmlWrite };

/// Root of strings.xml: labels shown to the user and log message templates.
#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "resources")]
pub struct ResourcesElement {
    #[xml(child = "string")]
    pub strings: Vec<StringElement>,
}

/// `<string name="...">content</string>`; content may hold `{{handlebars}}` placeholders.
#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "string")]
pub struct StringElement {
    #[xml(attr = "name")]
    pub name: String,
    #[xml(text)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_strings_in_document_order() {
        let xml = r#"<resources>
            <string name="ingredients_label">Ingredients</string>
            <string name="loading_meals_info_message_template">Loading {{category}}</string>
        </resources>"#;
        let resources = ResourcesElement::from_str(xml).unwrap();
        let names: Vec<&str> = resources.strings.iter().map(|string_element| string_element.name.as_str()).collect();
        assert_eq!(names, vec!["ingredients_label", "loading_meals_info_message_template"]);
        assert_eq!(resources.strings[1].content, "Loading {{category}}");
    }
}
