use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::app::ActionContext;
use crate::error::Result;

/// Shared handle to a page. Values written by dialogs land in the page the
/// embedding application owns, so they survive the next repaint.
pub type PageRef = Rc<RefCell<Page>>;

/// One row of a page. `None` is a gap: drawn blank, never selectable.
pub type Slot = Option<Item>;

#[derive(Clone, Debug)]
pub struct Page {
    pub title: String,
    pub items: Vec<Slot>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(Some(item));
        self
    }

    pub fn gap(mut self) -> Self {
        self.items.push(None);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index).and_then(Option::as_mut)
    }

    pub fn find(&self, title: &str) -> Option<&Item> {
        self.items.iter().flatten().find(|item| item.title == title)
    }

    pub fn find_mut(&mut self, title: &str) -> Option<&mut Item> {
        self.items.iter_mut().flatten().find(|item| item.title == title)
    }

    pub fn into_ref(self) -> PageRef {
        Rc::new(RefCell::new(self))
    }
}

/// Produces the page to show each time its tab becomes active.
#[derive(Clone)]
pub struct PageGenerator(Rc<dyn Fn() -> PageRef>);

impl PageGenerator {
    pub fn new(f: impl Fn() -> PageRef + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Always hands back the same page.
    pub fn fixed(page: PageRef) -> Self {
        Self::new(move || Rc::clone(&page))
    }

    pub fn generate(&self) -> PageRef {
        (self.0)()
    }
}

impl From<Page> for PageGenerator {
    fn from(page: Page) -> Self {
        Self::fixed(page.into_ref())
    }
}

impl From<PageRef> for PageGenerator {
    fn from(page: PageRef) -> Self {
        Self::fixed(page)
    }
}

impl fmt::Debug for PageGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PageGenerator(..)")
    }
}

type ActionFn = dyn Fn(&mut ActionContext<'_>, &mut Item) -> Result<()>;

/// Callback run when an option item is activated. It may rewrite the
/// item's value, open dialogs, or ask the engine to exit.
#[derive(Clone)]
pub struct Action(Rc<ActionFn>);

impl Action {
    pub fn new(f: impl Fn(&mut ActionContext<'_>, &mut Item) -> Result<()> + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn invoke(&self, ctx: &mut ActionContext<'_>, item: &mut Item) -> Result<()> {
        (self.0)(ctx, item)
    }

    /// True when both handles share one callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

#[derive(Clone, Debug)]
pub enum ItemKind {
    /// Informational row; Enter does nothing.
    Plain,
    Option { action: Option<Action> },
    /// Picks one of `values`; the item's value is the chosen index.
    Select { values: Vec<String> },
    Subpage(PageGenerator),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Index(usize),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

#[derive(Clone, Debug)]
pub struct Item {
    pub title: String,
    pub kind: ItemKind,
    pub value: Option<Value>,
    pub help: Option<String>,
}

impl Item {
    fn with_kind(title: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            title: title.into(),
            kind,
            value: None,
            help: None,
        }
    }

    pub fn plain(title: impl Into<String>) -> Self {
        Self::with_kind(title, ItemKind::Plain)
    }

    /// Read-only `title: value` row.
    pub fn info(title: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::plain(title).value(value)
    }

    pub fn option(title: impl Into<String>) -> Self {
        Self::with_kind(title, ItemKind::Option { action: None })
    }

    pub fn select<V: Into<String>>(title: impl Into<String>, values: impl IntoIterator<Item = V>, index: usize) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        let mut item = Self::with_kind(title, ItemKind::Select { values });
        item.value = Some(Value::Index(index));
        item
    }

    pub fn subpage(title: impl Into<String>, page: impl Into<PageGenerator>) -> Self {
        Self::with_kind(title, ItemKind::Subpage(page.into()))
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attaches `f` as this item's action, turning it into an option item.
    pub fn action(mut self, f: impl Fn(&mut ActionContext<'_>, &mut Item) -> Result<()> + 'static) -> Self {
        self.kind = ItemKind::Option {
            action: Some(Action::new(f)),
        };
        self
    }

    /// Everything but plain rows reacts to Enter.
    pub fn is_activatable(&self) -> bool {
        !matches!(self.kind, ItemKind::Plain)
    }

    pub fn is_subpage(&self) -> bool {
        matches!(self.kind, ItemKind::Subpage(_))
    }

    /// Whether `other` is this item, possibly with a different value: same
    /// title and kind, and for options the same callback.
    pub fn is_same_item(&self, other: &Item) -> bool {
        let same_kind = match (&self.kind, &other.kind) {
            (ItemKind::Option { action: Some(a) }, ItemKind::Option { action: Some(b) }) => a.ptr_eq(b),
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        };
        self.title == other.title && same_kind
    }

    pub fn index(&self) -> Option<usize> {
        match self.value {
            Some(Value::Index(index)) => Some(index),
            _ => None,
        }
    }

    /// Text shown in the value column: selects show the chosen entry, and
    /// activatable rows wrap their value in brackets.
    pub fn value_label(&self) -> Option<String> {
        let value = match (&self.kind, self.value.as_ref()?) {
            (ItemKind::Select { values }, Value::Index(index)) => values.get(*index).cloned().unwrap_or_default(),
            (_, value) => value.to_string(),
        };
        Some(if self.is_activatable() { format!("[{value}]") } else { value })
    }

    /// Sidebar text for this item: its help, or its title when it has none.
    pub fn help_text(&self) -> &str {
        self.help.as_deref().unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_labels_by_kind() {
        assert_eq!(Item::info("Project Version", "1.23.4567").value_label().as_deref(), Some("1.23.4567"));
        assert_eq!(
            Item::option("System Time").value("00:00:00").value_label().as_deref(),
            Some("[00:00:00]")
        );
        assert_eq!(
            Item::select("Network boot", ["Disabled", "Enabled"], 1).value_label().as_deref(),
            Some("[Enabled]")
        );
        assert_eq!(Item::option("Restore Defaults").value_label(), None);
    }

    #[test]
    fn out_of_range_select_index_shows_empty() {
        let item = Item::select("Boot mode", ["UEFI only"], 4);
        assert_eq!(item.value_label().as_deref(), Some("[]"));
    }

    #[test]
    fn help_falls_back_to_title() {
        assert_eq!(Item::plain("Project Build Date").help_text(), "Project Build Date");
        assert_eq!(Item::plain("x").help("Set the date").help_text(), "Set the date");
    }

    #[test]
    fn same_item_ignores_the_value_but_not_the_callback() {
        let save = Item::option("Save").action(|_, _| Ok(()));
        let mut edited = save.clone();
        edited.value = Some("OK".into());
        assert!(save.is_same_item(&edited));

        let other = Item::option("Save").action(|_, _| Ok(()));
        assert!(!save.is_same_item(&other));
        assert!(!save.is_same_item(&Item::plain("Save")));
        assert!(!save.is_same_item(&Item::option("Load").action(|_, _| Ok(()))));
    }

    #[test]
    fn fixed_generator_shares_one_page() {
        let generator = PageGenerator::from(Page::new("Boot").item(Item::select("Mode", ["a", "b"], 0)));
        generator.generate().borrow_mut().items[0].as_mut().unwrap().value = Some(Value::Index(1));
        assert_eq!(generator.generate().borrow().get(0).unwrap().index(), Some(1));
    }

    #[test]
    fn builder_keeps_gaps_in_place() {
        let page = Page::new("Main").item(Item::plain("A")).gap().item(Item::plain("B"));
        assert!(page.items[1].is_none());
        assert_eq!(page.get(2).map(|i| i.title.as_str()), Some("B"));
        assert!(page.find("B").is_some());
    }
}
