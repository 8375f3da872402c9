//! Live search and click-to-sort for data tables.

use crate::app::dom::{by_id, query_all_in, query_in, report};
use crate::core::table::{
    BODY_ROW_SELECTOR, CARD_SELECTOR, SEARCH_INPUT_SELECTOR, SORT_ASC_CLASS, SORT_DESC_CLASS,
    SORTABLE_HEADER_SELECTOR, SortDirection, row_matches, sort_permutation,
};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, Node};

/// Wire search and sort on the table `table_id`, if it exists.
pub fn initialize_data_table(table_id: &str) {
    let Some(table) = by_id(table_id) else {
        return;
    };
    add_table_search(&table);
    add_table_sort(&table);
}

fn add_table_search(table: &Element) {
    let Some(input) = table
        .closest(CARD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|card| query_in(&card, SEARCH_INPUT_SELECTOR))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let table = table.clone();
    let source = input.clone();
    EventListener::new(&input, "input", move |_| filter_rows(&table, &source.value())).forget();
}

fn filter_rows(table: &Element, query: &str) {
    for row in query_all_in(table, BODY_ROW_SELECTOR) {
        let text = row.text_content().unwrap_or_default();
        let Some(row) = row.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let style = row.style();
        if row_matches(&text, query) {
            report("row show", style.remove_property("display"));
        } else {
            report("row hide", style.set_property("display", "none"));
        }
    }
}

fn add_table_sort(table: &Element) {
    for header in query_all_in(table, SORTABLE_HEADER_SELECTOR) {
        if let Some(cell) = header.dyn_ref::<HtmlElement>() {
            report("header cursor", cell.style().set_property("cursor", "pointer"));
        }
        let table = table.clone();
        let target = header.clone();
        EventListener::new(&header, "click", move |_| sort_table(&table, &target)).forget();
    }
}

fn sort_table(table: &Element, header: &Element) {
    let Some(column) = column_index(header) else {
        return;
    };
    let direction = SortDirection::after_click(header.class_list().contains(SORT_ASC_CLASS));
    for th in query_all_in(table, "th") {
        report(
            "sort class reset",
            th.class_list().remove_2(SORT_ASC_CLASS, SORT_DESC_CLASS),
        );
    }
    report("sort class set", header.class_list().add_1(direction.class()));

    let Some(body) = query_in(table, "tbody") else {
        return;
    };
    let rows = query_all_in(table, BODY_ROW_SELECTOR);
    let keys: Vec<String> = rows.iter().map(|row| cell_text(row, column)).collect();
    for idx in sort_permutation(&keys, direction) {
        report("row reorder", body.append_child(&rows[idx]));
    }
}

fn column_index(header: &Element) -> Option<u32> {
    let node: &Node = header;
    let siblings = header.parent_element()?.children();
    (0..siblings.length()).find(|&idx| {
        siblings
            .item(idx)
            .is_some_and(|sibling| sibling.is_same_node(Some(node)))
    })
}

fn cell_text(row: &Element, column: u32) -> String {
    row.children()
        .item(column)
        .and_then(|cell| cell.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
