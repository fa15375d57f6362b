use web_sys::Element;

use crate::Result;

/// The DOM operations the like handler needs from an element.
pub trait LikeNode: Clone + PartialEq {
    fn has_class(&self, class: &str) -> bool;

    /// Adds the class if missing, removes it otherwise. Returns whether it's now present.
    fn toggle_class(&self, class: &str) -> Result<bool>;

    fn parent(&self) -> Option<Self>;

    /// Direct element children, in document order.
    fn children(&self) -> Vec<Self>;
}

impl LikeNode for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        self.class_list().toggle(class)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn children(&self) -> Vec<Self> {
        let collection = Element::children(self);

        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }
}
