use postboard_common::{Card, Container, Page};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// The live document of the page
pub struct DomPage(pub Document);

/// An element of a [`DomPage`]
pub struct DomContainer {
    document: Document,
    element: Element,
}

impl Page for DomPage {
    type Container = DomContainer;

    fn container(&self, id: &str) -> Option<DomContainer> {
        self.0.get_element_by_id(id).map(|element| DomContainer {
            document: self.0.clone(),
            element,
        })
    }
}

impl DomContainer {
    fn child(&self, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let elt = self.document.create_element(tag)?;
        elt.set_class_name(class);
        elt.set_text_content(Some(text));
        Ok(elt)
    }
}

impl Container for DomContainer {
    type Error = JsValue;

    fn clear(&self) -> Result<(), JsValue> {
        self.element.set_inner_html("");
        Ok(())
    }

    fn append_card(&self, card: &Card) -> Result<(), JsValue> {
        let div = self.document.create_element("div")?;
        div.set_class_name(Card::CLASS);
        div.append_child(&self.child("h2", Card::TITLE_CLASS, &card.title)?.into())?;
        div.append_child(&self.child("p", Card::BODY_CLASS, &card.body)?.into())?;
        div.append_child(&self.child("span", Card::AUTHOR_CLASS, &card.author_label())?.into())?;
        self.element.append_child(&div)?;
        Ok(())
    }
}
