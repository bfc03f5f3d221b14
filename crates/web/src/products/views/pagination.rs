use leptos::prelude::*;

use super::PaginationLinks;

fn page_href(page: u32) -> String {
    format!("/products?page={page}")
}

fn item_class(enabled: bool) -> &'static str {
    if enabled { "page-item" } else { "page-item disabled" }
}

/// Previous/next and numbered links. Hidden when everything fits on one page.
#[component]
pub(super) fn PaginationNav(links: PaginationLinks) -> impl IntoView {
    let PaginationLinks {
        current,
        pages,
        has_previous,
        has_next,
    } = links;

    let last = pages.last().copied().unwrap_or(1);
    let previous = current.saturating_sub(1).clamp(1, last);
    let next = current.saturating_add(1).min(last);

    (pages.len() > 1).then(|| {
        view! {
            <nav aria-label="Product pages">
                <ul class="pagination">
                    <li class=item_class(has_previous)>
                        <a class="page-link" href=page_href(previous)>"Previous"</a>
                    </li>
                    {pages
                        .into_iter()
                        .map(|number| {
                            let class = if number == current {
                                "page-item active"
                            } else {
                                "page-item"
                            };

                            view! {
                                <li class=class>
                                    <a class="page-link" href=page_href(number)>{number}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class=item_class(has_next)>
                        <a class="page-link" href=page_href(next)>"Next"</a>
                    </li>
                </ul>
            </nav>
        }
    })
}
