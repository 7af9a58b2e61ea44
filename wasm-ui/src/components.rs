//! UI Components shared by the calculators.

use gloo::timers::callback::Timeout;
use labcalc::{
    ClientConfig, ComponentRow, CopyFeedback, MASTER_MIX_HEADERS, MasterMixTable, ResultBody,
    ResultView, RowField, RowId,
};
use yew::prelude::*;

use crate::clipboard;

/// Card framing one calculator.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub hint: AttrValue,
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <section class="panel calculator">
            <div class="panel-header">
                <h2>{ props.title.to_string() }</h2>
                if !props.hint.is_empty() {
                    <span class="hint">{ props.hint.to_string() }</span>
                }
            </div>
            <div class="panel-content">
                { props.children.clone() }
            </div>
        </section>
    }
}

/// Labelled text or number input.
#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("number"))]
    pub kind: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="field">
            <label for={props.id.clone()}>{ props.label.to_string() }</label>
            <input
                id={props.id.clone()}
                type={props.kind.clone()}
                step="any"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
            />
        </div>
    }
}

/// One editable reagent line of the PCR form.
#[derive(Properties, PartialEq)]
pub struct ComponentRowEditorProps {
    pub row: ComponentRow,
    pub on_edit: Callback<(RowId, RowField, String)>,
    pub on_remove: Callback<RowId>,
}

#[function_component(ComponentRowEditor)]
pub fn component_row_editor(props: &ComponentRowEditorProps) -> Html {
    let id = props.row.id;
    let edit = |field: RowField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |value: String| on_edit.emit((id, field, value)))
    };
    let on_remove_click = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };

    html! {
        <div class="pcr-component-row">
            <Field
                id={format!("pcr-comp-name-{}", id)}
                label="Component Name"
                kind="text"
                placeholder="e.g., Primer F"
                value={props.row.name.clone()}
                on_change={edit(RowField::Name)}
            />
            <Field
                id={format!("pcr-comp-stock-{}", id)}
                label="Stock (X)"
                placeholder="10"
                value={props.row.stock.clone()}
                on_change={edit(RowField::Stock)}
            />
            <Field
                id={format!("pcr-comp-final-{}", id)}
                label="Final (X)"
                placeholder="0.5"
                value={props.row.final_conc.clone()}
                on_change={edit(RowField::Final)}
            />
            <button type="button" class="remove-button" onclick={on_remove_click}>
                { "-" }
            </button>
        </div>
    }
}

fn master_mix_html(table: &MasterMixTable) -> Html {
    html! {
        <>
            <p>
                { "Total Master Mix Volume: " }
                <strong>{ format!("{} µL", table.total_mm_volume) }</strong>
            </p>
            <table class="master-mix">
                <thead>
                    <tr>
                        { for MASTER_MIX_HEADERS.iter().map(|h| html! { <th>{ *h }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for table.rows.iter().map(|row| html! {
                        <tr>
                            <td class="name">{ &row.name }</td>
                            <td class="num">{ row.single_rxn_vol.to_string() }</td>
                            <td class="num total">{ row.master_mix_vol.to_string() }</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </>
    }
}

fn body_html(body: &ResultBody) -> Html {
    match body {
        ResultBody::Text(text) => html! { <>{ text }</> },
        ResultBody::MasterMix(table) => master_mix_html(table),
    }
}

/// Result container for one calculator.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub id: AttrValue,
    pub view: ResultView,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let feedback = use_state_eq(CopyFeedback::default);

    // A fresh result gets a fresh Copy label
    {
        let feedback = feedback.clone();
        use_effect_with(props.view.clone(), move |_| {
            feedback.set(CopyFeedback::Idle);
        });
    }

    // Revert "Copied!" after the configured delay
    {
        let feedback = feedback.clone();
        use_effect_with(
            (*feedback, config.copy_feedback_ms),
            move |(current, delay_ms)| {
                let handle = (*current == CopyFeedback::Copied).then(|| {
                    let feedback = feedback.clone();
                    Timeout::new(*delay_ms, move || feedback.set(CopyFeedback::Idle))
                });
                move || {
                    if let Some(handle) = handle {
                        handle.cancel();
                    }
                }
            },
        );
    }

    let on_copy = {
        let feedback = feedback.clone();
        let text = props.view.copy_text();
        Callback::from(move |_: MouseEvent| {
            let Some(text) = text.clone() else {
                return;
            };
            let feedback = feedback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match clipboard::write_text(&text).await {
                    Ok(()) => feedback.set(CopyFeedback::Copied),
                    Err(e) => log::warn!("copy to clipboard failed: {:?}", e),
                }
            });
        })
    };

    match &props.view {
        ResultView::Hidden => html! {
            <div id={props.id.clone()} class="result-wrapper" style="display: none;" />
        },
        ResultView::Success { body, explanation } => html! {
            <div id={props.id.clone()} class="result-wrapper success" style="display: block;">
                <div class="result-header">
                    <div>
                        <p class="result-label">{ "Result:" }</p>
                        <div class="result-text">{ body_html(body) }</div>
                    </div>
                    <button type="button" class="copy-btn" onclick={on_copy}>
                        { feedback.label() }
                    </button>
                </div>
                <p class="explanation-box">{ explanation }</p>
            </div>
        },
        ResultView::Error { message } => html! {
            <div id={props.id.clone()} class="result-wrapper error" style="display: block;">
                <p class="error-label">{ "Error:" }</p>
                <p class="error-message">{ message }</p>
            </div>
        },
    }
}

/// Light/dark switch for the page theme.
#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub dark: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let label = if props.dark { "Light mode" } else { "Dark mode" };

    html! {
        <button type="button" class="theme-toggle" {onclick}>{ label }</button>
    }
}
