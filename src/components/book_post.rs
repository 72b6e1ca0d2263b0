use crate::components::like_button::LikeButton;
use crate::components::ui::{Card, CardFooter, CardHeader, CardList, CardTitle};
use crate::models::BookSummary;
use leptos::prelude::*;

pub(crate) fn book_details_path(id: &str) -> String {
    format!("/book/{}", urlencoding::encode(id))
}

/// One book post. Clicking anywhere but the like button opens the details page.
#[component]
pub fn BookPost(book: BookSummary) -> impl IntoView {
    let count = RwSignal::new(book.interest_count.to_string());
    let details = book_details_path(&book.id);

    view! {
        <Card
            class="book-post cursor-pointer transition-colors hover:bg-surface-hover"
            on:click=move |_| {
                let _ = window().location().set_href(&details);
            }
        >
            <CardHeader>
                <CardTitle class="truncate text-sm">{book.title}</CardTitle>
            </CardHeader>
            <CardFooter>
                <span class="text-xs text-muted-foreground">
                    <span class="interest-count">{move || count.get()}</span>
                    " interested"
                </span>
                <LikeButton book_id=book.id count=count />
            </CardFooter>
        </Card>
    }
}

#[component]
pub fn BookFeed(books: Vec<BookSummary>) -> impl IntoView {
    view! {
        <CardList>
            {books
                .into_iter()
                .map(|book| view! { <li><BookPost book=book /></li> })
                .collect_view()}
        </CardList>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_details_path() {
        assert_eq!(book_details_path("65f0c0ffee"), "/book/65f0c0ffee");
        assert_eq!(book_details_path("a b"), "/book/a%20b");
    }
}
