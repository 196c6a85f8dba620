//! HTML serialization (render tree → HTML export)
//!
//! Builds an RcDom mirror of the render tree and serializes it with
//! html5ever, then wraps the result in a complete HTML document with the
//! baseline stylesheet embedded.

use crate::error::RenderError;
use crate::render::tree::{RenderContent, RenderNode, StructuredTable};
use crate::targets::html::HtmlOptions;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Emit a complete HTML document for the render tree.
pub fn emit_html(tree: &RenderNode, options: &HtmlOptions) -> Result<String, RenderError> {
    let dom = build_dom(tree, options);
    let body = serialize_dom(&dom)?;
    let title = document_title(tree).unwrap_or_else(|| "Document".to_string());
    Ok(wrap_in_document(&body, &title, options))
}

/// Build an HTML DOM tree from the render tree.
fn build_dom(tree: &RenderNode, options: &HtmlOptions) -> RcDom {
    let dom = RcDom::default();
    let container = create_element("main", &[("class", "docview-document")]);

    // The document root contributes no element of its own; its children land
    // directly in the container. Any other root renders as itself.
    if matches!(tree.content, RenderContent::Document) {
        for child in &tree.children {
            append_node(&container, child, options);
        }
    } else {
        append_node(&container, tree, options);
    }

    dom.document.children.borrow_mut().push(container);
    dom
}

/// Append the HTML form of one render node to `parent`.
fn append_node(parent: &Handle, node: &RenderNode, options: &HtmlOptions) {
    let key = node.index.to_string();

    match &node.content {
        RenderContent::Document => {
            let div = create_element("div", &keyed(options, &key, &[("class", "docview-document")]));
            append_children(&div, node, options);
            parent.children.borrow_mut().push(div);
        }

        RenderContent::Heading { level } => {
            let tag = format!("h{}", (*level).clamp(1, 6));
            let heading = create_element(&tag, &keyed(options, &key, &[]));
            append_children(&heading, node, options);
            parent.children.borrow_mut().push(heading);
        }

        RenderContent::Paragraph => {
            let para = create_element("p", &keyed(options, &key, &[("class", "docview-paragraph")]));
            append_children(&para, node, options);
            parent.children.borrow_mut().push(para);
        }

        RenderContent::BlockQuote => {
            let quote = create_element("blockquote", &keyed(options, &key, &[]));
            append_children(&quote, node, options);
            parent.children.borrow_mut().push(quote);
        }

        RenderContent::List { ordered } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let list = create_element(tag, &keyed(options, &key, &[("class", "docview-list")]));
            append_children(&list, node, options);
            parent.children.borrow_mut().push(list);
        }

        RenderContent::ListItem => {
            let item = create_element("li", &keyed(options, &key, &[]));
            append_children(&item, node, options);
            parent.children.borrow_mut().push(item);
        }

        RenderContent::CodeBlock { language, literal } => {
            let mut attrs = vec![("class", "docview-codeblock")];
            let lang_string;
            if let Some(language) = language {
                lang_string = language.clone();
                attrs.push(("data-language", &lang_string));
            }
            let pre = create_element("pre", &keyed(options, &key, &attrs));
            let code = create_element("code", &[]);
            code.children.borrow_mut().push(create_text(literal));
            pre.children.borrow_mut().push(code);
            parent.children.borrow_mut().push(pre);
        }

        RenderContent::Rule => {
            let hr = create_element("hr", &keyed(options, &key, &[]));
            parent.children.borrow_mut().push(hr);
        }

        RenderContent::Table(table) => {
            append_table(parent, table, &key, options);
        }

        RenderContent::Text(text) => {
            parent.children.borrow_mut().push(create_text(text));
        }

        RenderContent::Bold => {
            let strong = create_element("strong", &[]);
            append_children(&strong, node, options);
            parent.children.borrow_mut().push(strong);
        }

        RenderContent::Italic => {
            let em = create_element("em", &[]);
            append_children(&em, node, options);
            parent.children.borrow_mut().push(em);
        }

        RenderContent::Strikethrough => {
            let del = create_element("del", &[]);
            append_children(&del, node, options);
            parent.children.borrow_mut().push(del);
        }

        RenderContent::Code(literal) => {
            let code = create_element("code", &[]);
            code.children.borrow_mut().push(create_text(literal));
            parent.children.borrow_mut().push(code);
        }

        RenderContent::Link { destination } => {
            let mut attrs = vec![("href", destination.as_str())];
            if destination.is_empty() {
                attrs.push(("class", "docview-link-broken"));
            }
            let anchor = create_element("a", &attrs);
            append_children(&anchor, node, options);
            parent.children.borrow_mut().push(anchor);
        }

        RenderContent::Image { source, title } => {
            let alt = collect_text(node);
            let mut attrs = vec![("src", source.as_str()), ("alt", alt.as_str())];
            if let Some(title) = title {
                attrs.push(("title", title.as_str()));
            }
            let img = create_element("img", &attrs);
            parent.children.borrow_mut().push(img);
        }

        RenderContent::LineBreak => {
            let br = create_element("br", &[]);
            parent.children.borrow_mut().push(br);
        }

        RenderContent::SoftBreak => {
            parent.children.borrow_mut().push(create_text(" "));
        }

        RenderContent::Empty => {
            // Skipped node: occupies a position in the render tree but
            // contributes nothing to presentation.
        }

        RenderContent::Placeholder { note } => {
            let span = create_element(
                "span",
                &keyed(options, &key, &[("class", "docview-placeholder")]),
            );
            span.children.borrow_mut().push(create_text(&format!("[{note}]")));
            parent.children.borrow_mut().push(span);
        }
    }
}

/// Append a table with distinct `<thead>` / `<tbody>` groups.
fn append_table(parent: &Handle, table: &StructuredTable, key: &str, options: &HtmlOptions) {
    let table_el = create_element("table", &keyed(options, key, &[("class", "docview-table")]));

    if !table.header.is_empty() {
        let thead = create_element("thead", &[]);
        let tr = create_element("tr", &[]);
        for cell in &table.header {
            append_cell(&tr, cell, "th", options);
        }
        thead.children.borrow_mut().push(tr);
        table_el.children.borrow_mut().push(thead);
    }

    if !table.body.is_empty() {
        let tbody = create_element("tbody", &[]);
        for row in &table.body {
            let row_key = row.index.to_string();
            let tr = create_element("tr", &keyed(options, &row_key, &[]));
            for cell in &row.cells {
                append_cell(&tr, cell, "td", options);
            }
            tbody.children.borrow_mut().push(tr);
        }
        table_el.children.borrow_mut().push(tbody);
    }

    parent.children.borrow_mut().push(table_el);
}

/// Append one table cell. The cell element carries the cell's render index;
/// cells are inline context, so a paragraph wrapper around a multi-inline
/// cell is flattened into the cell element.
fn append_cell(row: &Handle, cell: &RenderNode, tag: &str, options: &HtmlOptions) {
    let key = cell.index.to_string();
    let cell_el = create_element(tag, &keyed(options, &key, &[]));

    match &cell.content {
        RenderContent::Paragraph => append_children(&cell_el, cell, options),
        _ => append_node(&cell_el, cell, options),
    }

    row.children.borrow_mut().push(cell_el);
}

fn append_children(parent: &Handle, node: &RenderNode, options: &HtmlOptions) {
    for child in &node.children {
        append_node(parent, child, options);
    }
}

/// Prepend the `data-key` attribute when key annotations are enabled.
fn keyed<'a>(
    options: &HtmlOptions,
    key: &'a str,
    attrs: &[(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    let mut all = Vec::with_capacity(attrs.len() + 1);
    if options.include_keys {
        all.push(("data-key", key));
    }
    all.extend_from_slice(attrs);
    all
}

/// Gather the plain text below a node (used for image alt text).
fn collect_text(node: &RenderNode) -> String {
    let mut text = String::new();
    node.visit(&mut |n| match &n.content {
        RenderContent::Text(t) => text.push_str(t),
        RenderContent::Code(t) => text.push_str(t),
        _ => {}
    });
    text
}

/// Find a document title: the text of the first level-1 heading, if any.
fn document_title(tree: &RenderNode) -> Option<String> {
    let mut title = None;
    tree.visit(&mut |node| {
        if title.is_none() {
            if let RenderContent::Heading { level: 1 } = node.content {
                let text = collect_text(node);
                if !text.is_empty() {
                    title = Some(text);
                }
            }
        }
    });
    title
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: &[(&str, &str)]) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(*name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM to an HTML string (just the inner content)
fn serialize_dom(dom: &RcDom) -> Result<String, RenderError> {
    let mut output = Vec::new();

    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| RenderError::EmitError("Empty document".to_string()))?
        .clone();

    // Serialize each child of the container; the wrapper document provides
    // the outer element.
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| RenderError::EmitError(format!("HTML serialization failed: {e}")))?;
    }

    String::from_utf8(output)
        .map_err(|e| RenderError::EmitError(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let baseline_css = crate::targets::html::BASELINE_CSS;
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="docview">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<main class="docview-document">
{body_html}
</main>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
