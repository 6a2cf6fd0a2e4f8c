use std::rc::Rc;

use biosmenu::{ActionContext, Item, Page, PageGenerator, PageRef, Result};
use chrono::Local;

const VERSION: &str = "1.23.4567";
const BUILD_DATE: &str = "01/01/1970";

/// The sample setup: Main, Boot and Exit tabs.
pub fn pages() -> Vec<PageGenerator> {
    vec![main_page(), boot_page().into(), exit_page().into()]
}

/// Main is rebuilt around one shared page so the clock is fresh on every
/// visit while values written by dialogs stay put.
fn main_page() -> PageGenerator {
    let page = Page::new("Main")
        .item(Item::info("Project Version", VERSION))
        .item(Item::info("Project Build Date", BUILD_DATE))
        .gap()
        .item(
            Item::option("System Date")
                .value(Local::now().format("%m/%d/%Y").to_string())
                .help("Set the current system date")
                .action(confirm_clear),
        )
        .item(
            Item::option("System Time")
                .value("00:00:00")
                .help("Set the current system time"),
        )
        .gap()
        .item(
            Item::subpage("Hardware Information", hardware_page())
                .help("View details about installed hardware"),
        )
        .into_ref();

    PageGenerator::new(move || {
        refresh_clock(&page);
        Rc::clone(&page)
    })
}

fn refresh_clock(page: &PageRef) {
    if let Some(item) = page.borrow_mut().find_mut("System Time") {
        item.value = Some(Local::now().format("%H:%M:%S").to_string().into());
    }
}

fn hardware_page() -> Page {
    Page::new("Hardware Info")
        .item(Item::info("Project Version", VERSION))
        .item(Item::info("Project Build Date", BUILD_DATE))
        .gap()
        .item(Item::info("Processor", "x86_64"))
        .item(Item::info("Total Memory", "16384 MB"))
}

fn boot_page() -> Page {
    Page::new("Boot")
        .item(
            Item::select("Boot mode", ["UEFI only", "UEFI and CSM", "Legacy"], 0).help(
                "Set the UEFI boot mode\n\
                 UEFI only = Boot only UEFI devices\n\
                 UEFI and CSM = Boot both UEFI and legacy devices\n\
                 Legacy = Boot only legacy devices",
            ),
        )
        .item(Item::select("Network boot", ["Disabled", "Enabled"], 1).help("Enable/Disable network boot"))
        .gap()
        .item(
            Item::option("Change boot order")
                .help("Edit the order of boot devices")
                .action(confirm_clear),
        )
}

fn exit_page() -> Page {
    Page::new("Exit")
        .item(
            Item::option("Save Changes and Exit")
                .help("Save changed settings and reset the computer\nF10 can be used for this")
                .action(|ctx, _| {
                    exit_if_confirmed(ctx, "Save Changes and Exit", "Save configuration and reset?")
                }),
        )
        .item(
            Item::option("Discard Changes and Exit")
                .help("Discard changed settings and reset the computer")
                .action(|ctx, _| {
                    exit_if_confirmed(ctx, "Discard Changes and Exit", "Discard configuration and reset?")
                }),
        )
        .item(
            Item::option("Discard Changes")
                .help("Discard changed settings")
                .action(|ctx, item| {
                    if ctx.message_box("Discard Changes", "Discard configuration changes?", &["Yes", "No"], 0)? == 0 {
                        item.value = Some("OK".into());
                    }
                    Ok(())
                }),
        )
        .item(Item::option("Restore Defaults").help("Restore all settings to defaults and reset the computer"))
}

fn confirm_clear(ctx: &mut ActionContext<'_>, item: &mut Item) -> Result<()> {
    if ctx.message_box("Title", "Are you sure to perform?", &["Yes", "No"], 0)? == 0 {
        item.value = Some("Clear".into());
    }
    Ok(())
}

fn exit_if_confirmed(ctx: &mut ActionContext<'_>, title: &str, text: &str) -> Result<()> {
    if ctx.message_box(title, text, &["Yes", "No"], 0)? == 0 {
        ctx.request_exit();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosmenu::{App, Config, Headless, Theme, Value};

    fn run(input: &[u8]) -> (App, Result<()>) {
        let mut app = App::new(pages(), Config::default(), &Theme::default());
        let mut console = Headless::new(80, 25, input);
        let result = app.run(&mut console);
        (app, result)
    }

    #[test]
    fn tabs_match_the_three_pages() {
        let app = App::new(pages(), Config::default(), &Theme::default());
        assert_eq!(app.tabs(), ["Main", "Boot", "Exit"]);
    }

    #[test]
    fn escape_then_confirm_saves_and_exits() {
        // ESC swallows the next byte, hence the filler `x`
        let (app, result) = run(b"\x1bx\r\r");
        assert!(result.is_ok());
        assert_eq!(app.page_index, 2);
    }

    #[test]
    fn declining_the_prompt_keeps_the_menu_running() {
        // No, then Discard Changes and Exit, Yes
        let (_, result) = run(b"\x1bx\r\x1b[C\r\x1b[B\r\r");
        assert!(result.is_ok());
    }

    #[test]
    fn clock_is_refreshed_on_each_visit() {
        let generator = main_page();
        let page = generator.generate();
        let time = page.borrow().find("System Time").and_then(|i| i.value.clone());
        let Some(Value::Text(time)) = time else {
            panic!("System Time has no text value");
        };
        assert_eq!(time.len(), 8);
        assert_eq!(&time[2..3], ":");
        assert_eq!(&time[5..6], ":");
        assert!(Rc::ptr_eq(&page, &generator.generate()));
    }
}
