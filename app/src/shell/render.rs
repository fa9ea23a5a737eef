//! Plain-text rendering of catalog views.

use std::io::{self, Write};

use menu_catalog::{CourseSelection, MenuItem};

/// Write one item card: a headline and an indented description.
pub(crate) fn write_card(out: &mut impl Write, item: &MenuItem) -> io::Result<()> {
    writeln!(out, "{} [{}] {}", item.name(), item.course(), item.price())?;
    writeln!(out, "    {}", item.description())
}

/// Write the full listing headed by the total.
pub(crate) fn write_home(out: &mut impl Write, items: &[MenuItem]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No menu items yet. Add one!");
    }
    writeln!(out, "Total Items: {}", items.len())?;
    for item in items {
        write_card(out, item)?;
    }
    Ok(())
}

/// Write a filtered listing headed by the result count.
pub(crate) fn write_filtered(
    out: &mut impl Write,
    selected: CourseSelection,
    items: &[&MenuItem],
) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No items found in {selected} category.");
    }
    writeln!(out, "Results: {} ({selected})", items.len())?;
    for item in items {
        write_card(out, item)?;
    }
    Ok(())
}

/// Write the course selector options.
pub(crate) fn write_courses(out: &mut impl Write) -> io::Result<()> {
    let labels: Vec<&str> = CourseSelection::OPTIONS
        .iter()
        .map(|selection| selection.label())
        .collect();
    writeln!(out, "{}", labels.join(" | "))
}

/// Write the command summary.
pub(crate) fn write_help(out: &mut impl Write) -> io::Result<()> {
    let usage = concat!(
        "Commands:\n",
        "  list                                        Show every menu item\n",
        "  courses                                     Show the course options\n",
        "  filter <All|course>                         Show items of one course\n",
        "  add <course> | <name> | <description> | <price>\n",
        "                                              Add a new menu item\n",
        "  help                                        Print this help output\n",
        "  quit                                        Leave the shell\n",
    );
    out.write_all(usage.as_bytes())
}
