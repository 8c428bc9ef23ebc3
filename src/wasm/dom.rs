use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::catalog::Card;
use crate::config::PageSelectors;
use crate::error::{Error, Result};
use crate::sprite::Sprite;
use crate::stage::{Slot, Stage};

/// [`Stage`] over the live document.
pub struct DomStage {
    document: Document,
    selectors: PageSelectors,
}

impl DomStage {
    pub fn new(document: Document, selectors: PageSelectors) -> Self {
        Self {
            document,
            selectors,
        }
    }

    fn create(&self, tag: &str) -> Result<Element> {
        Ok(self.document.create_element(tag)?)
    }
}

impl Stage for DomStage {
    type Node = Element;

    fn slot(&self, slot: Slot) -> Option<Element> {
        let selector = match slot {
            Slot::FloatingHearts => self.selectors.floating_hearts,
            Slot::BurstZone => self.selectors.burst_zone,
            Slot::Gallery => self.selectors.gallery,
            Slot::Finale => self.selectors.finale,
        };
        self.document.query_selector(selector).ok().flatten()
    }

    fn reveal_targets(&self) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(self.selectors.reveal) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn append_sprite(&self, parent: &Element, sprite: &Sprite) -> Result<Element> {
        let el: HtmlElement = self
            .create("span")?
            .dyn_into()
            .map_err(|_| Error::Dom("span is not an HtmlElement".into()))?;
        el.set_class_name(sprite.class_name());
        el.set_text_content(Some(sprite.glyph().as_str()));

        let style = el.style();
        for (name, value) in sprite.style_properties() {
            style.set_property(name, &value)?;
        }

        parent.append_child(&el)?;
        Ok(el.into())
    }

    fn append_card(&self, parent: &Element, card: &Card) -> Result<Element> {
        let figure = self.create("figure")?;
        figure.set_class_name(Card::CLASS);

        let img = self.create("img")?;
        img.set_attribute("src", &card.image_url)?;
        img.set_attribute("alt", &card.alt)?;

        let caption = self.create("figcaption")?;
        let name = self.create("strong")?;
        name.set_text_content(Some(card.name));
        caption.append_child(&name)?;
        let line = self
            .document
            .create_text_node(&format!("{}{}", Card::SEPARATOR, card.line));
        caption.append_child(&line)?;

        figure.append_child(&img)?;
        figure.append_child(&caption)?;
        parent.append_child(&figure)?;
        Ok(figure)
    }

    fn children(&self, parent: &Element) -> Vec<Element> {
        let list = parent.children();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn clear(&self, parent: &Element) {
        parent.set_inner_html("");
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn mark_visible(&self, node: &Element) {
        node.class_list().add_1("is-visible").ok();
    }
}
