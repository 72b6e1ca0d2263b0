use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-3 rounded-xl border py-4 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1 px-4"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardFooter, footer, "flex items-center justify-between px-4", "gap-2"}
    clx! {CardList, ul, "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3"}
}

pub use components::*;
