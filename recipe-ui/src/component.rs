//! Component tree.

use serde::Serialize;

use crate::RouterProvider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Heading(Heading),
    Text(Text),
    Button(Button),
    Link(Link),
    Container(Container),
    Router(RouterProvider),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub content: String,
}

/// An activatable control. `id` names the action in the owning view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Container {
    pub children: Vec<Component>,
}

impl Component {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Component::Heading(Heading { level, text: text.into() })
    }

    pub fn text(content: impl Into<String>) -> Self {
        Component::Text(Text { content: content.into() })
    }

    pub fn button(id: impl Into<String>, label: impl Into<String>) -> Self {
        Component::Button(Button { id: id.into(), label: label.into() })
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Component::Link(Link { href: href.into(), label: label.into() })
    }

    pub fn container(children: Vec<Component>) -> Self {
        Component::Container(Container { children })
    }

    /// Direct children, empty for leaves.
    pub fn children(&self) -> &[Component] {
        match self {
            Component::Container(c) => &c.children,
            Component::Router(r) => &r.children,
            _ => &[],
        }
    }

    /// Depth-first search for the first component matching `pred`.
    pub fn find(&self, pred: &impl Fn(&Component) -> bool) -> Option<&Component> {
        if pred(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(pred))
    }
}
