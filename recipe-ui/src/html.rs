//! HTML rendering of component trees.

use std::fmt::Write;

use crate::Component;

/// Rendering options.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// When set, each button is wrapped in a form posting to
    /// `{controls_path}/{button id}`.
    pub controls_path: Option<String>,
}

impl HtmlOptions {
    pub fn with_controls_path(path: impl Into<String>) -> Self {
        Self { controls_path: Some(path.into()) }
    }
}

/// Render a component tree to an HTML fragment.
pub fn render(component: &Component, options: &HtmlOptions) -> String {
    let mut out = String::new();
    write_component(&mut out, component, options);
    out
}

fn write_component(out: &mut String, component: &Component, options: &HtmlOptions) {
    match component {
        Component::Heading(h) => {
            let level = h.level.clamp(1, 6);
            let _ = write!(out, "<h{level}>{}</h{level}>", escape(&h.text));
        }
        Component::Text(t) => {
            let _ = write!(out, "<p>{}</p>", escape(&t.content));
        }
        Component::Button(b) => {
            let id = escape(&b.id);
            let label = escape(&b.label);
            match &options.controls_path {
                Some(path) => {
                    let _ = write!(
                        out,
                        r#"<form method="post" action="{}/{id}"><button type="submit" id="{id}">{label}</button></form>"#,
                        escape(path.trim_end_matches('/')),
                    );
                }
                None => {
                    let _ = write!(out, r#"<button type="button" id="{id}">{label}</button>"#);
                }
            }
        }
        Component::Link(l) => {
            let _ = write!(out, r#"<a href="{}">{}</a>"#, escape(&l.href), escape(&l.label));
        }
        Component::Container(c) => {
            out.push_str("<div>");
            for child in &c.children {
                write_component(out, child, options);
            }
            out.push_str("</div>");
        }
        Component::Router(r) => {
            let _ = write!(out, r#"<div data-router="{}">"#, r.kind.as_str());
            for child in &r.children {
                write_component(out, child, options);
            }
            out.push_str("</div>");
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
