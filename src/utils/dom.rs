use html5ever::tendril::TendrilSink;
use html5ever::{local_name, ns, parse_document, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// A parsed tree together with the node walking starts from.
///
/// Dropping an `RcDom` empties the child lists of every node in it, so the
/// dom is kept here for as long as `root` is in use.
pub struct Body {
    root: Handle,
    _dom: RcDom,
}

impl Body {
    /// Parse `html` as the content of a `<body>` element.
    pub fn parse_fragment(html: &str) -> Option<Self> {
        let context = QualName::new(None, ns!(html), local_name!("body"));
        let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![], false)
            .one(html);

        let root = dom.document.children.borrow().first().cloned()?;
        Some(Self { root, _dom: dom })
    }

    /// Parse `html` as a whole document and keep its `<body>` element.
    pub fn parse_document(html: &str) -> Option<Self> {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let root = find_element(&dom.document, "html").and_then(|html| find_element(&html, "body"))?;
        Some(Self { root, _dom: dom })
    }

    pub fn root(&self) -> &Handle {
        &self.root
    }
}

fn find_element(parent: &Handle, local: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { name, .. } if &*name.local == local))
        .cloned()
}

/// Concatenated text of `node` and its descendants, markup stripped.
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![node.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    text
}
