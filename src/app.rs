use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{self, CostAction};
use crate::config::Config;
use crate::models::{
    sample_dashboard, sample_spend_history, CostRecord, Credentials, CustomerService,
    DashboardSummary, ServiceForm,
};
use crate::store::{
    clear_stored_token, read_stored_token, write_stored_token, AuthAction, AuthState,
    TransactionsAction, TransactionsState,
};

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Costs,
    SpendHistory,
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    Wallet,
    UpRight,
    CreditCard,
    Target,
}

#[function_component(App)]
pub fn app() -> Html {
    // Persisted storage is read exactly once here and injected into the
    // reducer; an existing token is trusted without server confirmation.
    let auth = use_reducer(|| AuthState::restore(read_stored_token()));
    let active_page = use_state(|| Page::Dashboard);

    if !auth.is_authenticated {
        return html! { <LoginScreen auth={auth} /> };
    }

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            clear_stored_token();
            auth.dispatch(AuthAction::Logout);
        })
    };

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Costs => html! { <CostManagementPage /> },
        Page::SpendHistory => html! { <SpendHistoryPage /> },
    };

    html! {
        <ContextProvider<Config> context={Config::default()}>
            <div class="min-h-screen bg-background flex flex-col">
                <Header active_page={*active_page} on_select={on_select} on_logout={on_logout} />
                <main class="flex-1 overflow-y-auto">
                    { content }
                </main>
            </div>
        </ContextProvider<Config>>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active_page: Page,
    on_select: Callback<Page>,
    on_logout: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Cost Management",
            page: Page::Costs,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Spend History",
            page: Page::SpendHistory,
            icon: icon_bar_chart,
        },
    ];

    html! {
        <header class="bg-[#173E63] h-16 flex items-center justify-between px-6 shadow-lg">
            <span class="text-white text-xl font-black tracking-tight">{"Trancendos Ecosystem"}</span>
            <nav class="flex items-center gap-2">
                { for nav_items.iter().map(|item| {
                    let is_active = item.page == props.active_page;
                    let class_name = if is_active {
                        "flex items-center gap-2 px-4 py-2 rounded-xl text-[13px] font-medium bg-[#B2CBDE] text-[#173E63]"
                    } else {
                        "flex items-center gap-2 px-4 py-2 rounded-xl text-[13px] font-medium text-slate-300 hover:bg-white/10 hover:text-white"
                    };
                    let on_select = props.on_select.clone();
                    let page = item.page;
                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span class="whitespace-nowrap">{ item.label }</span>
                        </button>
                    }
                }) }
                <button onclick={props.on_logout.clone()} class="flex items-center gap-2 px-4 py-2 rounded-xl hover:bg-white/10 text-[13px] font-medium text-slate-300">
                    { icon_log_out() }
                    <span>{"Log Out"}</span>
                </button>
            </nav>
        </header>
    }
}

fn page_shell(title: &'static str, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub auth: UseReducerHandle<AuthState>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let auth = props.auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                auth.dispatch(AuthAction::LoginFailure(
                    "Email and password are required".to_string(),
                ));
                return;
            }

            auth.dispatch(AuthAction::LoginStart);

            let auth = auth.clone();
            spawn_local(async move {
                let credentials = Credentials {
                    email: email_val,
                    password: password_val,
                };
                match api::login(&credentials).await {
                    Ok(session) => {
                        write_stored_token(&session.token);
                        auth.dispatch(AuthAction::LoginSuccess {
                            user: session.user,
                            token: session.token,
                        });
                    }
                    Err(err) => {
                        let message = match &err {
                            api::ApiError::Status { message, .. } => message.clone(),
                            api::ApiError::Transport(_) => "Login failed".to_string(),
                        };
                        gloo_console::error!(format!("Login request failed: {err}"));
                        auth.dispatch(AuthAction::LoginFailure(message));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Sign In to Trancendos"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">{"Access your financial dashboard."}</p>
                </div>

                if let Some(msg) = &props.auth.error {
                    <div class="mb-4 px-4 py-3 rounded-lg bg-red-50 border border-red-200 text-sm text-red-600">
                        { msg.clone() }
                    </div>
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Email Address"}</label>
                        <input
                            type="email"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={props.auth.loading}
                    >
                        { if props.auth.loading { "Signing In..." } else { "Sign In" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    let summary = use_state(|| None::<DashboardSummary>);
    let loading = use_state(|| true);
    let config = use_context::<Config>().unwrap_or_default();

    {
        let summary = summary.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_dashboard().await {
                        Ok(data) => summary.set(Some(data)),
                        Err(err) => {
                            gloo_console::error!(format!("Error fetching dashboard data: {err}"));
                            if config.demo_fallback {
                                gloo_console::warn!(
                                    "Dashboard endpoint unavailable, showing demo sample data"
                                );
                                summary.set(Some(sample_dashboard()));
                            }
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    if *loading {
        return page_shell(
            "Financial Dashboard",
            html! { <p class="text-sm text-muted-foreground">{"Loading..."}</p> },
        );
    }

    let Some(data) = (*summary).clone() else {
        return page_shell(
            "Financial Dashboard",
            html! { <p class="text-sm text-red-600">{"Dashboard data is unavailable."}</p> },
        );
    };

    let max_balance = data
        .chart_data
        .iter()
        .map(|p| p.balance)
        .fold(0.0_f64, f64::max);

    page_shell(
        "Financial Dashboard",
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    <StatCard title="Total Balance" value={format_usd(data.total_balance)} icon={StatIcon::Wallet} />
                    <StatCard title="Monthly Income" value={format!("+{}", format_usd(data.monthly_income))} icon={StatIcon::UpRight} />
                    <StatCard title="Monthly Expenses" value={format!("-{}", format_usd(data.monthly_expenses))} icon={StatIcon::CreditCard} />
                    <StatCard title="Savings Goal" value={format_usd(data.savings_goal)} icon={StatIcon::Target} />
                </div>

                <div class="bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-foreground text-lg mb-4">{"Balance Trend"}</h3>
                    <div class="space-y-3">
                        { for data.chart_data.iter().map(|point| {
                            let percent = if max_balance > 0.0 {
                                (point.balance / max_balance * 100.0).round() as i64
                            } else {
                                0
                            };
                            html! {
                                <div class="flex items-center gap-3 text-sm">
                                    <span class="w-10 text-muted-foreground">{ point.month.clone() }</span>
                                    <div class="flex-1 h-3 bg-secondary rounded-full overflow-hidden">
                                        <div class="h-full bg-primary" style={format!("width: {}%", percent)}></div>
                                    </div>
                                    <span class="w-28 text-right font-semibold text-foreground">{ format_usd(point.balance) }</span>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </>
        },
    )
}

fn refresh_costs(costs: UseStateHandle<Vec<CostRecord>>, loading: UseStateHandle<bool>) {
    spawn_local(async move {
        match api::fetch_costs().await {
            Ok(list) => costs.set(list),
            Err(err) => gloo_console::error!(format!("Error fetching costs: {err}")),
        }
        loading.set(false);
    });
}

fn refresh_services(services: UseStateHandle<Vec<CustomerService>>, loading: UseStateHandle<bool>) {
    spawn_local(async move {
        match api::fetch_customer_services().await {
            Ok(list) => services.set(list),
            Err(err) => gloo_console::error!(format!("Error fetching customer services: {err}")),
        }
        loading.set(false);
    });
}

#[function_component(CostManagementPage)]
fn cost_management_page() -> Html {
    let costs = use_state(Vec::<CostRecord>::new);
    let loading_costs = use_state(|| true);
    let action_error = use_state(|| None::<String>);

    let services = use_state(Vec::<CustomerService>::new);
    let loading_services = use_state(|| true);
    let form = use_state(ServiceForm::default);
    let form_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    {
        let costs = costs.clone();
        let loading_costs = loading_costs.clone();
        let services = services.clone();
        let loading_services = loading_services.clone();
        use_effect_with_deps(
            move |_| {
                refresh_costs(costs, loading_costs);
                refresh_services(services, loading_services);
                || ()
            },
            (),
        );
    }

    let on_action = {
        let costs = costs.clone();
        let loading_costs = loading_costs.clone();
        let action_error = action_error.clone();
        Callback::from(move |(id, action): (i64, CostAction)| {
            let costs = costs.clone();
            let loading_costs = loading_costs.clone();
            let action_error = action_error.clone();
            spawn_local(async move {
                let outcome = match action {
                    CostAction::Approve => api::approve_cost(id).await,
                    CostAction::Reject => api::reject_cost(id).await,
                };
                match outcome {
                    Ok(()) => {
                        action_error.set(None);
                        // The backend owns the transition; re-fetch to see
                        // the authoritative status.
                        refresh_costs(costs, loading_costs);
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Error resolving cost {id}: {err}"));
                        action_error.set(Some(format!("Could not update cost record: {err}")));
                    }
                }
            });
        })
    };

    let on_add_service = {
        let form = form.clone();
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let services = services.clone();
        let loading_services = loading_services.clone();
        Callback::from(move |_| {
            let new_service = match form.validate() {
                Ok(v) => v,
                Err(msg) => {
                    form_error.set(Some(msg));
                    return;
                }
            };

            form_error.set(None);
            submitting.set(true);

            let form = form.clone();
            let form_error = form_error.clone();
            let submitting = submitting.clone();
            let services = services.clone();
            let loading_services = loading_services.clone();
            spawn_local(async move {
                match api::create_customer_service(&new_service).await {
                    Ok(_) => {
                        form.set(ServiceForm::default());
                        refresh_services(services, loading_services);
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Error adding service: {err}"));
                        form_error.set(Some(format!("Could not add the service: {err}")));
                    }
                }
                submitting.set(false);
            });
        })
    };

    page_shell(
        "Finance and Accountancy Dashboard",
        html! {
            <>
                <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                    <div class="p-6 flex justify-between items-center border-b border-border">
                        <h3 class="font-bold text-foreground text-lg">{"Internal Cost Management"}</h3>
                    </div>
                    if let Some(msg) = &*action_error {
                        <div class="mx-6 mt-4 px-4 py-3 rounded-lg bg-red-50 border border-red-200 text-sm text-red-600">
                            { msg.clone() }
                        </div>
                    }
                    <div class="overflow-x-auto">
                        <table class="w-full text-left border-collapse">
                            <thead>
                                <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-8 py-4 font-bold">{"Service Name"}</th>
                                    <th class="px-8 py-4 font-bold">{"Details"}</th>
                                    <th class="px-8 py-4 font-bold">{"Status"}</th>
                                    <th class="px-8 py-4 font-bold text-right">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { if *loading_costs {
                                    html! { <tr><td colspan="4" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                } else if costs.is_empty() {
                                    html! { <tr><td colspan="4" class="px-8 py-6 text-center text-muted-foreground">{"No cost records."}</td></tr> }
                                } else {
                                    html! {
                                        <>
                                            { for costs.iter().map(|cost| {
                                                let pending = cost.status.is_pending();
                                                let approve = {
                                                    let on_action = on_action.clone();
                                                    let id = cost.id;
                                                    Callback::from(move |_| on_action.emit((id, CostAction::Approve)))
                                                };
                                                let reject = {
                                                    let on_action = on_action.clone();
                                                    let id = cost.id;
                                                    Callback::from(move |_| on_action.emit((id, CostAction::Reject)))
                                                };
                                                html! {
                                                    <tr key={cost.id} class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-8 py-4 text-foreground">{ cost.service_name.clone() }</td>
                                                        <td class="px-8 py-4 text-muted-foreground">{ cost.cost_details.clone() }</td>
                                                        <td class="px-8 py-4">
                                                            <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ cost.status.label() }</span>
                                                        </td>
                                                        <td class="px-8 py-4 text-right space-x-2">
                                                            <button onclick={approve} disabled={!pending} class="bg-green-600 disabled:bg-slate-300 text-white px-4 py-1.5 rounded-lg text-xs font-bold">{"Approve"}</button>
                                                            <button onclick={reject} disabled={!pending} class="bg-red-600 disabled:bg-slate-300 text-white px-4 py-1.5 rounded-lg text-xs font-bold">{"Reject"}</button>
                                                        </td>
                                                    </tr>
                                                }
                                            }) }
                                        </>
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                    <div class="p-6 flex justify-between items-center border-b border-border">
                        <h3 class="font-bold text-foreground text-lg">{"Customer Services"}</h3>
                    </div>
                    <div class="overflow-x-auto">
                        <table class="w-full text-left border-collapse">
                            <thead>
                                <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-8 py-4 font-bold">{"Service Name"}</th>
                                    <th class="px-8 py-4 font-bold">{"Description"}</th>
                                    <th class="px-8 py-4 font-bold text-right">{"Price"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { if *loading_services {
                                    html! { <tr><td colspan="3" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                } else if services.is_empty() {
                                    html! { <tr><td colspan="3" class="px-8 py-6 text-center text-muted-foreground">{"No services offered yet."}</td></tr> }
                                } else {
                                    html! {
                                        <>
                                            { for services.iter().map(|service| html! {
                                                <tr key={service.id} class="text-sm hover:bg-muted/30 transition-colors">
                                                    <td class="px-8 py-4 text-foreground">{ service.name.clone() }</td>
                                                    <td class="px-8 py-4 text-muted-foreground">{ service.description.clone() }</td>
                                                    <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_usd(service.price) }</td>
                                                </tr>
                                            }) }
                                        </>
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>

                    <div class="p-6 border-t border-border">
                        <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add New Service"}</h4>
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                            <input placeholder="Name" value={form.name.clone()} oninput={{
                                let form = form.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    let mut next = (*form).clone();
                                    next.name = input.value();
                                    form.set(next);
                                })
                            }} class="p-2 border rounded" />
                            <input placeholder="Description" value={form.description.clone()} oninput={{
                                let form = form.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    let mut next = (*form).clone();
                                    next.description = input.value();
                                    form.set(next);
                                })
                            }} class="p-2 border rounded" />
                            <input placeholder="Price ($)" value={form.price.clone()} oninput={{
                                let form = form.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    let mut next = (*form).clone();
                                    next.price = input.value();
                                    form.set(next);
                                })
                            }} class="p-2 border rounded" />
                            <button onclick={on_add_service} disabled={*submitting} class="bg-[#173E63] text-white px-4 py-2 rounded-lg text-sm font-bold">
                                { if *submitting { "Adding..." } else { "Add Service" } }
                            </button>
                        </div>
                        if let Some(msg) = &*form_error {
                            <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p>
                        }
                    </div>
                </div>
            </>
        },
    )
}

#[function_component(SpendHistoryPage)]
fn spend_history_page() -> Html {
    let transactions = use_reducer(TransactionsState::default);
    let visible = use_state(|| false);
    let config = use_context::<Config>().unwrap_or_default();

    {
        let transactions = transactions.clone();
        use_effect_with_deps(
            move |_| {
                transactions.dispatch(TransactionsAction::FetchStart);
                spawn_local(async move {
                    match api::fetch_spend_history().await {
                        Ok(rows) => transactions.dispatch(TransactionsAction::FetchSuccess(rows)),
                        Err(err) => {
                            gloo_console::error!(format!("Error fetching spend history: {err}"));
                            if config.demo_fallback {
                                gloo_console::warn!(
                                    "Spend-history endpoint unavailable, showing demo sample data"
                                );
                                transactions.dispatch(TransactionsAction::FetchSuccess(
                                    sample_spend_history(),
                                ));
                            } else {
                                transactions
                                    .dispatch(TransactionsAction::FetchFailure(err.to_string()));
                            }
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let toggle_visibility = {
        let visible = visible.clone();
        Callback::from(move |_| visible.set(!*visible))
    };

    page_shell(
        "Spend History",
        html! {
            <>
                <button onclick={toggle_visibility} class="bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { if *visible { "Hide Spend History" } else { "Show Spend History" } }
                </button>

                if let Some(msg) = &transactions.error {
                    <p class="text-sm text-red-600">{ msg.clone() }</p>
                }

                if *visible {
                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-8 py-4 font-bold">{"Date"}</th>
                                        <th class="px-8 py-4 font-bold">{"Description"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Amount"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if transactions.loading {
                                        html! { <tr><td colspan="3" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                    } else if transactions.items.is_empty() {
                                        html! { <tr><td colspan="3" class="px-8 py-6 text-center text-muted-foreground">{"No spend records."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for transactions.items.iter().map(|row| html! {
                                                    <tr key={row.date.clone()} class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-8 py-4 text-muted-foreground">{ row.date.clone() }</td>
                                                        <td class="px-8 py-4 text-foreground">{ row.description.clone() }</td>
                                                        <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_usd(row.amount) }</td>
                                                    </tr>
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
            </>
        },
    )
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ props.value.clone() }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Wallet => icon_wallet(),
                        StatIcon::UpRight => icon_arrow_up_right(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Target => icon_target(),
                    }
                }
            </div>
        </div>
    }
}

fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as i64;
    format!("{sign}${}.{:02}", format_with_commas(cents / 100), cents % 100)
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands_and_keeps_cents() {
        assert_eq!(format_usd(125_000.50), "$125,000.50");
        assert_eq!(format_usd(8_500.00), "$8,500.00");
        assert_eq!(format_usd(3_200.75), "$3,200.75");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-40.00), "-$40.00");
    }

    #[test]
    fn comma_grouping() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(150_000), "150,000");
        assert_eq!(format_with_commas(-1_234_567), "-1,234,567");
    }
}
