use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Quiz,
    #[at("/result")]
    Result,
    #[at("/404")]
    #[not_found]
    NotFound,
}
