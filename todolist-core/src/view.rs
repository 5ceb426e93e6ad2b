//! Display projection of a [`TaskList`].
//!
//! [`render`] is called after every transition and produces the full list
//! view: the active section (or an empty-state placeholder), a spacer, then
//! the completed section when it has anything in it. The terminal layer
//! only paints what it is given here.

use crate::task::{Task, TaskId, TaskList};

/// Heading above the active tasks.
pub const ITEMS_HEADING: &str = "Items";

/// Heading above the completed tasks.
pub const COMPLETED_HEADING: &str = "Completed Items";

/// Placeholder shown in place of an empty active section.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No active items. Add a task to get started!";

/// One task row as the painter sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    /// Id of the task behind this row.
    pub id: TaskId,
    /// Task text, untruncated.
    pub text: &'a str,
    /// Checkbox state.
    pub completed: bool,
}

impl<'a> RowView<'a> {
    fn of(task: &'a Task) -> Self {
        Self {
            id: task.id(),
            text: task.text(),
            completed: task.is_completed(),
        }
    }

    /// Whether the row gets the emphasized background.
    #[must_use]
    pub const fn emphasized(&self) -> bool {
        self.completed
    }
}

/// A node in the rendered list, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// Section heading.
    Heading(&'static str),
    /// A task row.
    Row(RowView<'a>),
    /// Empty-state placeholder message.
    Empty(&'a str),
    /// Vertical gap between sections.
    Spacer,
}

/// The rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> ListView<'a> {
    /// All nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    /// Task rows in display order (active first, then completed).
    pub fn rows(&self) -> impl Iterator<Item = RowView<'a>> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Row(row) => Some(*row),
            _ => None,
        })
    }

    /// Number of task rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows().count()
    }

    /// The row at display position `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<RowView<'a>> {
        self.rows().nth(index)
    }

    /// Display position of the row for `id`.
    #[must_use]
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.rows().position(|row| row.id == id)
    }

    /// Index into [`nodes`](Self::nodes) of the row at display position
    /// `row_index`.
    #[must_use]
    pub fn node_index_of_row(&self, row_index: usize) -> Option<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, Node::Row(_)))
            .nth(row_index)
            .map(|(index, _)| index)
    }
}

/// Projects `list` into its display tree.
#[must_use]
pub fn render<'a>(list: &'a TaskList, empty_message: &'a str) -> ListView<'a> {
    let (active, completed) = list.partition();
    let mut nodes = Vec::with_capacity(list.len() + 4);

    if active.is_empty() {
        nodes.push(Node::Empty(empty_message));
    } else {
        nodes.push(Node::Heading(ITEMS_HEADING));
        nodes.extend(active.into_iter().map(|task| Node::Row(RowView::of(task))));
    }

    nodes.push(Node::Spacer);

    if !completed.is_empty() {
        nodes.push(Node::Heading(COMPLETED_HEADING));
        nodes.extend(completed.into_iter().map(|task| Node::Row(RowView::of(task))));
    }

    ListView { nodes }
}
