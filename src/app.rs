use tracing::{debug, info};

use crate::config::Config;
use crate::engine::selection::{Direction, first_selectable, next_selectable};
use crate::engine::window::{Window, compute_window};
use crate::error::Result;
use crate::event::Key;
use crate::page::{Item, ItemKind, PageGenerator, PageRef, Value};
use crate::terminal::{Console, RawModeGuard, Terminal};
use crate::ui::components::dialog::Dialog;
use crate::ui::components::help_panel::HelpPanel;
use crate::ui::components::item_list::ItemList;
use crate::ui::components::tabs::Tabs;
use crate::ui::draw::{draw_box, draw_text_block_centered};
use crate::ui::glyphs::Glyphs;
use crate::ui::layout::ScreenLayout;
use crate::ui::surface::Surface;
use crate::ui::theme::{Palettes, Theme};

/// What an item action gets to work with: the dialogs, and a way to end
/// the whole session.
pub struct ActionContext<'a> {
    console: &'a mut dyn Console,
    dialog: Dialog<'a>,
    exit_requested: bool,
}

impl<'a> ActionContext<'a> {
    pub fn new(console: &'a mut dyn Console, dialog: Dialog<'a>) -> Self {
        Self {
            console,
            dialog,
            exit_requested: false,
        }
    }

    pub fn message_box(&mut self, title: &str, text: &str, options: &[&str], selected: usize) -> Result<usize> {
        let choice = self.dialog.message_box(&mut *self.console, title, text, options, selected)?;
        debug!(title, choice, "message box result");
        Ok(choice)
    }

    pub fn select_box(&mut self, title: &str, values: &[String], selected: usize) -> Result<usize> {
        let choice = self.dialog.select_box(&mut *self.console, title, values, selected)?;
        debug!(title, choice, "select box result");
        Ok(choice)
    }

    /// Ends the session once the action returns. Every open page, nested
    /// sub-pages included, is left.
    pub fn request_exit(&mut self) {
        info!("exit requested");
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// How a page session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Something was activated: repaint everything, keep the selection.
    Reenter,
    /// A page-switch key.
    Leave(Leave),
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Leave {
    Previous,
    Next,
    Last,
}

/// Result of pressing Enter on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Activation {
    Ignored,
    Done,
    Exit,
}

pub struct App {
    pages: Vec<PageGenerator>,
    tabs: Vec<String>,
    config: Config,
    palettes: Palettes,
    glyphs: &'static Glyphs,
    pub page_index: usize,
    /// Carried across a repaint of the same page, dropped on page change.
    pub selected: Option<usize>,
}

impl App {
    pub fn new(pages: Vec<PageGenerator>, config: Config, theme: &Theme) -> Self {
        let tabs = pages
            .iter()
            .map(|generator| generator.generate().borrow().title.clone())
            .collect();

        Self {
            pages,
            tabs,
            glyphs: config.glyphs(),
            palettes: theme.palettes(),
            config,
            page_index: 0,
            selected: None,
        }
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    /// Runs the menu until an action requests exit. Running out of input
    /// surfaces as the console's I/O error.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.pages.is_empty() {
            return Ok(());
        }
        console.clear()?;
        console.set_cursor_visible(false)?;

        let last = self.pages.len() - 1;
        loop {
            let page = self.pages[self.page_index].generate();
            debug!(page = self.page_index, title = %page.borrow().title, "page activated");

            let mut selected = self.selected;
            let flow = self.session(console, &page, &self.tabs, self.page_index, &mut selected)?;
            self.selected = selected;

            match flow {
                Flow::Reenter => continue,
                Flow::Exit => return Ok(()),
                Flow::Leave(leave) => {
                    self.page_index = match leave {
                        Leave::Previous => self.page_index.saturating_sub(1),
                        Leave::Next => (self.page_index + 1).min(last),
                        Leave::Last => last,
                    };
                    self.selected = None;
                }
            }
        }
    }

    fn dialog(&self) -> Dialog<'_> {
        Dialog::new(&self.palettes.dialog, self.glyphs, self.config.dialog_ratio)
    }

    /// Paints the full screen for `page`, then handles keys until one of
    /// them leaves the page or needs a repaint.
    fn session(
        &self,
        console: &mut dyn Console,
        page: &PageRef,
        tabs: &[String],
        active_tab: usize,
        selected: &mut Option<usize>,
    ) -> Result<Flow> {
        let legend_lines = HelpPanel::legend_lines(&self.config.help_keys);
        let layout = ScreenLayout::new(console.size(), self.config.help_width, legend_lines);
        self.draw_chrome(console, &layout, tabs, active_tab)?;

        {
            let page = page.borrow();
            let still_valid = selected.is_some_and(|i| page.get(i).is_some());
            if !still_valid {
                *selected = first_selectable(&page.items);
            }
        }

        let mut window = Window::initial(usize::from(layout.items.height), page.borrow().items.len());
        loop {
            if let Some(index) = *selected {
                window = compute_window(index, window);
            }
            self.draw_page(console, &layout, page, *selected, window)?;

            console.move_to(layout.park)?;
            let key = console.read_key()?;
            debug!(?key, selected = ?*selected, "key");

            match key {
                Key::Up => *selected = next_selectable(&page.borrow().items, *selected, Direction::Backward),
                Key::Down => *selected = next_selectable(&page.borrow().items, *selected, Direction::Forward),
                Key::Enter => {
                    let Some(index) = *selected else { continue };
                    match self.activate(console, page, index)? {
                        Activation::Ignored => {}
                        Activation::Done => return Ok(Flow::Reenter),
                        Activation::Exit => return Ok(Flow::Exit),
                    }
                }
                Key::Left => return Ok(Flow::Leave(Leave::Previous)),
                Key::Right => return Ok(Flow::Leave(Leave::Next)),
                Key::Esc => return Ok(Flow::Leave(Leave::Last)),
                _ => console.bell()?,
            }
        }
    }

    fn activate(&self, console: &mut dyn Console, page: &PageRef, index: usize) -> Result<Activation> {
        let Some(mut item) = page.borrow().get(index).cloned() else {
            return Ok(Activation::Ignored);
        };
        debug!(title = %item.title, "activate");

        match item.kind.clone() {
            ItemKind::Plain => Ok(Activation::Ignored),
            ItemKind::Option { action: None } => Ok(Activation::Done),
            ItemKind::Option { action: Some(action) } => {
                let before = item.value.clone();
                let mut ctx = ActionContext::new(console, self.dialog());
                action.invoke(&mut ctx, &mut item)?;
                let exit = ctx.exit_requested();
                if item.value != before {
                    write_value(page, index, &item);
                }
                Ok(if exit { Activation::Exit } else { Activation::Done })
            }
            ItemKind::Select { values } => {
                let current = item.index().unwrap_or(0);
                let choice = self.dialog().select_box(console, &item.title, &values, current)?;
                debug!(title = %item.title, choice, "select box result");
                item.value = Some(Value::Index(choice));
                write_value(page, index, &item);
                Ok(Activation::Done)
            }
            ItemKind::Subpage(generator) => self.run_subpage(console, &generator),
        }
    }

    /// A sub-page is a modal copy of the page loop: only its own tab is
    /// shown and any page-switch key returns to the caller.
    fn run_subpage(&self, console: &mut dyn Console, generator: &PageGenerator) -> Result<Activation> {
        let mut selected = None;
        loop {
            let page = generator.generate();
            let tabs = [page.borrow().title.clone()];
            debug!(title = %tabs[0], "sub-page activated");

            match self.session(console, &page, &tabs, 0, &mut selected)? {
                Flow::Reenter => continue,
                Flow::Leave(_) => return Ok(Activation::Done),
                Flow::Exit => return Ok(Activation::Exit),
            }
        }
    }

    fn draw_chrome(&self, console: &mut dyn Console, layout: &ScreenLayout, tabs: &[String], active: usize) -> Result<()> {
        let Palettes { screen, header, .. } = &self.palettes;

        console.set_colors(header.normal)?;
        draw_text_block_centered(console, &self.config.title, layout.title, " ")?;
        console.set_colors(header.disabled)?;
        draw_text_block_centered(console, &self.config.version, layout.footer, " ")?;

        Tabs::new(tabs, active, header).render(console, layout.tabs)?;

        console.set_colors(screen.normal)?;
        draw_box(console, layout.frame, &[layout.divider], &[], self.glyphs)?;
        HelpPanel::new(&self.config.help_keys, screen, self.glyphs).render_legend(console, layout)?;
        Ok(())
    }

    fn draw_page(
        &self,
        console: &mut dyn Console,
        layout: &ScreenLayout,
        page: &PageRef,
        selected: Option<usize>,
        window: Window,
    ) -> Result<()> {
        let page = page.borrow();
        let screen = &self.palettes.screen;

        ItemList::new(&page.items, selected, window, screen, self.glyphs).render(console, layout.items)?;

        let help = selected.and_then(|i| page.get(i)).map_or("", Item::help_text);
        HelpPanel::new(&self.config.help_keys, screen, self.glyphs).render_text(console, layout.help_text, help)?;
        Ok(())
    }
}

/// Stores the value of `item` into row `index`, as long as that row still
/// holds the same item. Everything else in the page belongs to the caller.
fn write_value(page: &PageRef, index: usize, item: &Item) {
    let mut page = page.borrow_mut();
    match page.get_mut(index) {
        Some(slot) if slot.is_same_item(item) => slot.value = item.value.clone(),
        _ => debug!(title = %item.title, index, "row changed during activation, value dropped"),
    }
}

/// Runs `pages` on the real terminal. The terminal is restored on every
/// exit path, errors included.
pub fn run(pages: Vec<PageGenerator>, config: Config, theme: &Theme) -> Result<()> {
    let _guard = RawModeGuard::acquire()?;
    let mut terminal = Terminal::stdio();
    App::new(pages, config, theme).run(&mut terminal)
}
