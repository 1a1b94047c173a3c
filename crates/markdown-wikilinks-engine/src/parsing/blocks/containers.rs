use super::types::ContainerFrame;

#[derive(Debug, Clone, Copy)]
struct OpenList {
    id: usize,
    ordered: bool,
    item: usize,
    /// Blockquote depth the list was opened at.
    quote_depth: u8,
}

/// The container stack as the builder walks the document.
///
/// Blockquote depth is re-read from every line. Each open quote level keeps
/// its id until a line leaves it, so a quote interrupted by an unquoted line
/// reopens as a new blockquote. List state persists across lines until a
/// blank line is followed by an unindented, unmarked line or the blockquote
/// depth changes.
#[derive(Debug, Default, Clone)]
pub struct ContainerPath {
    /// Ids of the open quote levels, outermost first.
    quotes: Vec<usize>,
    list: Option<OpenList>,
    after_blank: bool,
    next_id: usize,
}

impl ContainerPath {
    pub fn quote_depth(&self) -> u8 {
        self.quotes.len() as u8
    }

    /// Updates the blockquote depth. Levels above `depth` close, new levels
    /// get fresh ids. A list opened at another depth closes.
    pub fn set_blockquote_depth(&mut self, depth: u8) {
        self.quotes.truncate(usize::from(depth));
        while self.quotes.len() < usize::from(depth) {
            let id = self.fresh_id();
            self.quotes.push(id);
        }
        if self.list.is_some_and(|list| list.quote_depth != depth) {
            self.list = None;
        }
    }

    pub fn mark_blank(&mut self) {
        self.after_blank = true;
    }

    /// Whether a non-blank, unmarked line with this indentation ends the
    /// open list.
    pub fn closes_list(&self, indent: usize) -> bool {
        self.list.is_some() && self.after_blank && indent == 0
    }

    /// Feeds a non-blank line that did not start with a list marker.
    pub fn continue_line(&mut self, indent: usize) {
        if self.closes_list(indent) {
            self.list = None;
        }
        self.after_blank = false;
    }

    /// Starts a new list item, opening a new list if none is open or the
    /// marker style changed.
    pub fn open_item(&mut self, ordered: bool) {
        let item = self.fresh_id();
        match self.list.as_mut() {
            Some(list) if list.ordered == ordered => list.item = item,
            _ => {
                let id = self.fresh_id();
                self.list = Some(OpenList {
                    id,
                    ordered,
                    item,
                    quote_depth: self.quote_depth(),
                });
            }
        }
        self.after_blank = false;
    }

    /// The current frames, outermost first.
    pub fn frames(&self) -> Vec<ContainerFrame> {
        let mut frames: Vec<ContainerFrame> = (1..=u8::MAX)
            .zip(&self.quotes)
            .map(|(depth, &id)| ContainerFrame::BlockQuote { depth, id })
            .collect();
        if let Some(list) = self.list {
            frames.push(ContainerFrame::List {
                id: list.id,
                ordered: list.ordered,
            });
            frames.push(ContainerFrame::ListItem { id: list.item });
        }
        frames
    }

    fn fresh_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
