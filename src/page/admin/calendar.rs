use dioxus::prelude::*;

use crate::{
    page::layout::CsrfField,
    server::{
        model::calendar::{add_block_field, day_key, remove_block_field, CalendarView},
        render::{
            helpers::{add, format_date, iterate},
            TemplateData,
        },
    },
};

/// One day of one room.
#[derive(Clone, PartialEq)]
enum Cell {
    Reserved { reservation_id: i32 },
    Blocked { field: String },
    Free { field: String },
}

#[derive(Clone, PartialEq)]
struct RoomRow {
    room_id: i32,
    room_name: String,
    cells: Vec<(i32, Cell)>,
}

/// Month view with a checkbox per room and day for managing owner blocks.
#[component]
pub fn AdminCalendar(data: TemplateData, calendar: CalendarView) -> Element {
    let token = data.csrf_token.clone();
    let month = calendar.month;
    let title = format_date(month.first_day(), "%B %Y");
    let this_month = data.string("this_month").to_string();
    let this_month_year = data.string("this_month_year").to_string();
    let next_month = data.string("next_month").to_string();
    let next_month_year = data.string("next_month_year").to_string();
    let last_month = data.string("last_month").to_string();
    let last_month_year = data.string("last_month_year").to_string();
    let day_numbers: Vec<i32> = iterate(data.int("days_in_month"))
        .map(|index| add(index, 1))
        .collect();

    let rows: Vec<RoomRow> = calendar
        .rooms
        .iter()
        .map(|room| {
            let cells = month
                .days()
                .zip(day_numbers.iter().copied())
                .map(|(date, day)| {
                    let key = day_key(date);
                    let reservation_id = room.reservations.get(&key).copied().unwrap_or(0);
                    let block_id = room.blocks.get(&key).copied().unwrap_or(0);

                    let cell = if reservation_id > 0 {
                        Cell::Reserved { reservation_id }
                    } else if block_id > 0 {
                        Cell::Blocked {
                            field: remove_block_field(room.room.id, &key),
                        }
                    } else {
                        Cell::Free {
                            field: add_block_field(room.room.id, &key),
                        }
                    };

                    (day, cell)
                })
                .collect();

            RoomRow {
                room_id: room.room.id,
                room_name: room.room.room_name.clone(),
                cells,
            }
        })
        .collect();

    rsx!(div {
        div {
            class: "calendar-nav",
            a {
                class: "btn btn-secondary",
                href: "/admin/reservations-calendar?y={last_month_year}&m={last_month}",
                "<<"
            }
            h3 { "{title}" }
            a {
                class: "btn btn-secondary",
                href: "/admin/reservations-calendar?y={next_month_year}&m={next_month}",
                ">>"
            }
        }
        form {
            action: "/admin/reservations-calendar",
            method: "post",
            CsrfField { token }
            input { r#type: "hidden", name: "y", value: "{this_month_year}" }
            input { r#type: "hidden", name: "m", value: "{this_month}" }
            for row in rows {
                div {
                    key: "{row.room_id}",
                    class: "calendar-room",
                    h4 { "{row.room_name}" }
                    table {
                        class: "calendar-table",
                        tr {
                            for day in day_numbers.iter().copied() {
                                th { key: "{day}", "{day}" }
                            }
                        }
                        tr {
                            for (day, cell) in row.cells {
                                td {
                                    key: "{day}",
                                    {render_cell(cell, &this_month_year, &this_month)}
                                }
                            }
                        }
                    }
                }
            }
            button { r#type: "submit", class: "btn btn-primary", "Save Changes" }
        }
    })
}

fn render_cell(cell: Cell, year: &str, month: &str) -> Element {
    match cell {
        Cell::Reserved { reservation_id } => rsx!(a {
            class: "reserved",
            href: "/admin/reservations/cal/{reservation_id}/show?y={year}&m={month}",
            "R"
        }),
        Cell::Blocked { field } => rsx!(input {
            r#type: "checkbox",
            name: "{field}",
            value: "1",
            checked: true,
        }),
        Cell::Free { field } => rsx!(input {
            r#type: "checkbox",
            name: "{field}",
            value: "1",
        }),
    }
}
