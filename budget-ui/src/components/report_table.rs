//! Results table, or the placeholder message when there is nothing to tabulate.

use budget_core::RenderedReport;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReportTableProps {
    pub report: RenderedReport,
}

/// Renders a [`RenderedReport`]. Re-rendering with a new report replaces
/// the previous markup entirely.
#[component]
pub fn ReportTable(props: ReportTableProps) -> Element {
    match props.report {
        RenderedReport::Placeholder(message) => rsx! {
            p {
                class: "text-center text-muted",
                "{message}"
            }
        },
        RenderedReport::Table(table) => rsx! {
            table {
                class: "table table-striped table-hover table-bordered",
                thead {
                    tr {
                        for header in table.headers.iter() {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    for (i, row) in table.rows.iter().enumerate() {
                        tr {
                            key: "{i}",
                            class: row.css_class(),
                            for cell in row.cells.iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        },
    }
}
