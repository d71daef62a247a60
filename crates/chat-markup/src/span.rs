//! Span arena for converted chat messages.
//!
//! A converted message is a list of segments (one per line). Each segment is
//! a root span whose children are the runs that follow it on that line.
//! Spans live in one arena and refer to their children by [`SpanId`], so
//! appending and merging only move indices around.

use chat_style::StyleState;

/// Index of a span inside its [`SpanTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanId(usize);

impl SpanId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a span displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanContent {
    /// Literal text.
    Text(String),
    /// A localization key, translated by the client.
    Translate { key: String, params: Vec<String> },
}

/// A styled run with an ordered chain of following runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    content: SpanContent,
    style: StyleState,
    children: Vec<SpanId>,
}

impl Span {
    /// Create a text span.
    pub fn text(text: impl Into<String>, style: StyleState) -> Self {
        Self::with_content(SpanContent::Text(text.into()), style)
    }

    /// Create a localized span.
    pub fn translate(key: impl Into<String>, params: Vec<String>, style: StyleState) -> Self {
        Self::with_content(
            SpanContent::Translate {
                key: key.into(),
                params,
            },
            style,
        )
    }

    pub fn with_content(content: SpanContent, style: StyleState) -> Self {
        Self {
            content,
            style,
            children: Vec::new(),
        }
    }

    pub fn content(&self) -> &SpanContent {
        &self.content
    }

    /// The literal text of this span alone; empty for localized spans.
    pub fn own_text(&self) -> &str {
        match &self.content {
            SpanContent::Text(text) => text,
            SpanContent::Translate { .. } => "",
        }
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn children(&self) -> &[SpanId] {
        &self.children
    }

    /// Returns true for an empty text span with no children.
    ///
    /// A line break leaves one of these behind as the start of the next line.
    pub fn is_blank(&self) -> bool {
        self.children.is_empty() && matches!(&self.content, SpanContent::Text(t) if t.is_empty())
    }
}

/// The result of a conversion: an arena of spans plus its segment roots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanTree {
    spans: Vec<Span>,
    roots: Vec<SpanId>,
}

impl SpanTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a span to the arena without attaching it anywhere.
    pub fn push(&mut self, span: Span) -> SpanId {
        let id = SpanId(self.spans.len());
        self.spans.push(span);
        id
    }

    /// Add a span and start a new segment with it.
    pub fn push_root(&mut self, span: Span) -> SpanId {
        let id = self.push(span);
        self.roots.push(id);
        id
    }

    /// Append `child` to the end of `parent`'s chain.
    pub fn append_child(&mut self, parent: SpanId, child: SpanId) {
        self.spans[parent.0].children.push(child);
    }

    pub fn span(&self, id: SpanId) -> &Span {
        &self.spans[id.0]
    }

    /// Segment roots in line order.
    pub fn roots(&self) -> &[SpanId] {
        &self.roots
    }

    pub fn segment_count(&self) -> usize {
        self.roots.len()
    }

    /// Total number of spans in the arena.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Moves the root at `index` to the end of the previous root's chain.
    ///
    /// The two segments become one line. Does nothing for `index == 0` or an
    /// index past the end.
    pub fn merge_root_into_previous(&mut self, index: usize) {
        if index == 0 || index >= self.roots.len() {
            return;
        }
        let moved = self.roots.remove(index);
        let target = self.roots[index - 1];
        self.append_child(target, moved);
    }

    /// The span and all of its descendants, in pre-order.
    pub fn subtree(&self, id: SpanId) -> Vec<SpanId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            order.push(next);
            stack.extend(self.spans[next.0].children.iter().rev());
        }
        order
    }

    /// Rewrites the style of `id` and every descendant.
    pub fn restyle_subtree(&mut self, id: SpanId, mut f: impl FnMut(StyleState) -> StyleState) {
        for span_id in self.subtree(id) {
            let span = &mut self.spans[span_id.0];
            span.style = f(std::mem::take(&mut span.style));
        }
    }

    /// The literal text of a span followed by its descendants.
    pub fn text_of(&self, id: SpanId) -> String {
        self.subtree(id)
            .into_iter()
            .map(|span_id| self.spans[span_id.0].own_text())
            .collect()
    }

    /// The literal text of each segment.
    pub fn lines(&self) -> Vec<String> {
        self.roots.iter().map(|root| self.text_of(*root)).collect()
    }

    /// The literal text of every segment, concatenated without separators.
    pub fn plain_text(&self) -> String {
        self.roots.iter().map(|root| self.text_of(*root)).collect()
    }
}
