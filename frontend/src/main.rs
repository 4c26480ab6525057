use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{CalendarPage, WaiversPage};
use services::api::ApiClient;

#[derive(Clone, Copy, PartialEq)]
enum AdminPage {
    Waivers,
    Calendar,
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| AdminPage::Waivers);
    let api_client = use_memo((), |_| ApiClient::new());

    let go_waivers = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(AdminPage::Waivers))
    };

    let go_calendar = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(AdminPage::Calendar))
    };

    let nav_class = |target: AdminPage| {
        if *page == target {
            "nav-btn active"
        } else {
            "nav-btn"
        }
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"ParkDesk Admin"}</h1>
                    <nav class="main-nav">
                        <button class={nav_class(AdminPage::Waivers)} onclick={go_waivers}>
                            {"Waivers"}
                        </button>
                        <button class={nav_class(AdminPage::Calendar)} onclick={go_calendar}>
                            {"Calendar"}
                        </button>
                    </nav>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    {match *page {
                        AdminPage::Waivers => html! {
                            <WaiversPage api_client={(*api_client).clone()} />
                        },
                        AdminPage::Calendar => html! {
                            <CalendarPage api_client={(*api_client).clone()} />
                        },
                    }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
