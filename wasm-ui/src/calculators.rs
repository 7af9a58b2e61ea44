//! The four calculator forms.
//!
//! Each form keeps its own field state and result view. Submitting builds a
//! typed request from the fields, posts it, and paints whatever settles into
//! the form's result panel. A response superseded by a newer submission of
//! the same form is dropped.

use labcalc::{
    Calculation, ClientConfig, DilutionForm, DilutionRequest, DnaConcentrationForm,
    DnaConcentrationRequest, Endpoint, PcrForm, PcrRequest, ResultView, RowField, RowId,
    SubmissionGate, UlToMmolForm, UlToMmolRequest, settle,
};
use yew::prelude::*;

use crate::client;
use crate::components::{Card, ComponentRowEditor, Field, ResultPanel};

/// Result view of calculation `C` plus a callback that submits a request.
#[hook]
fn use_calculator<C>() -> (ResultView, Callback<C>)
where
    C: Calculation + 'static,
{
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let view = use_state_eq(ResultView::default);
    let gate = use_mut_ref(SubmissionGate::new);

    let submit = {
        let view = view.clone();
        Callback::from(move |request: C| {
            let ticket = gate.borrow_mut().begin();
            let view = view.clone();
            let gate = gate.clone();
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client::call(&config, &request).await;
                if gate.borrow().accept(ticket) {
                    view.set(settle::<C>(result));
                }
            });
        })
    };

    ((*view).clone(), submit)
}

/// Callback that edits one field of a form held in `state`.
fn field_setter<F>(state: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<String>
where
    F: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |value: String| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

#[function_component(PcrCalculator)]
pub fn pcr_calculator() -> Html {
    let form = use_state(PcrForm::default);
    let (view, submit) = use_calculator::<PcrRequest>();

    let on_reactions = field_setter(&form, |f, v| f.reactions = v);
    let on_volume = field_setter(&form, |f, v| f.volume = v);

    let on_add = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.rows.add_blank();
            form.set(next);
        })
    };

    let on_remove = {
        let form = form.clone();
        Callback::from(move |id: RowId| {
            let mut next = (*form).clone();
            next.rows.remove(id);
            form.set(next);
        })
    };

    let on_edit = {
        let form = form.clone();
        Callback::from(move |(id, field, value): (RowId, RowField, String)| {
            let mut next = (*form).clone();
            next.rows.update(id, field, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(form.request());
        })
    };

    html! {
        <Card title={Endpoint::Pcr.title()} hint="Volumes include a safety margin">
            <form id="pcr-form" onsubmit={on_submit}>
                <div class="field-row">
                    <Field
                        id="pcr-reactions"
                        label="Number of Reactions"
                        placeholder="10"
                        value={form.reactions.clone()}
                        on_change={on_reactions}
                    />
                    <Field
                        id="pcr-volume"
                        label="Reaction Volume (µL)"
                        placeholder="50"
                        value={form.volume.clone()}
                        on_change={on_volume}
                    />
                </div>
                <div id="pcr-components" class="pcr-components">
                    if form.rows.is_empty() {
                        <p class="hint">{ "No components. Add one to include it in the mix." }</p>
                    }
                    { for form.rows.iter().map(|row| html! {
                        <ComponentRowEditor
                            key={row.id}
                            row={row.clone()}
                            on_edit={on_edit.clone()}
                            on_remove={on_remove.clone()}
                        />
                    })}
                </div>
                <div class="button-group">
                    <button type="button" id="add-pcr-component" class="add-button" onclick={on_add}>
                        { "+ Add Component" }
                    </button>
                    <button type="submit" class="run-button">{ "Calculate" }</button>
                </div>
            </form>
            <ResultPanel id="pcr-result-wrapper" {view} />
        </Card>
    }
}

#[function_component(DilutionCalculator)]
pub fn dilution_calculator() -> Html {
    let form = use_state(DilutionForm::default);
    let (view, submit) = use_calculator::<DilutionRequest>();

    let on_c1 = field_setter(&form, |f, v| f.c1 = v);
    let on_c2 = field_setter(&form, |f, v| f.c2 = v);
    let on_v2 = field_setter(&form, |f, v| f.v2 = v);

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(form.request());
        })
    };

    html! {
        <Card title={Endpoint::Dilution.title()} hint="C1V1 = C2V2, solving for V1">
            <form id="dilution-form" onsubmit={on_submit}>
                <div class="field-row">
                    <Field
                        id="dilution-c1"
                        label="Stock Concentration (C1)"
                        placeholder="10"
                        value={form.c1.clone()}
                        on_change={on_c1}
                    />
                    <Field
                        id="dilution-c2"
                        label="Final Concentration (C2)"
                        placeholder="1"
                        value={form.c2.clone()}
                        on_change={on_c2}
                    />
                    <Field
                        id="dilution-v2"
                        label="Final Volume (V2, µL)"
                        placeholder="100"
                        value={form.v2.clone()}
                        on_change={on_v2}
                    />
                </div>
                <button type="submit" class="run-button">{ "Calculate V1" }</button>
            </form>
            <ResultPanel id="dilution-result-wrapper" {view} />
        </Card>
    }
}

#[function_component(DnaConcentrationCalculator)]
pub fn dna_concentration_calculator() -> Html {
    let form = use_state(DnaConcentrationForm::default);
    let (view, submit) = use_calculator::<DnaConcentrationRequest>();

    let on_concentration = field_setter(&form, |f, v| f.concentration = v);
    let on_length = field_setter(&form, |f, v| f.length = v);

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(form.request());
        })
    };

    html! {
        <Card title={Endpoint::DnaConcentration.title()} hint="ng/µL to pmol/µL, dsDNA">
            <form id="dna-conc-form" onsubmit={on_submit}>
                <div class="field-row">
                    <Field
                        id="dna-conc"
                        label="Concentration (ng/µL)"
                        placeholder="50"
                        value={form.concentration.clone()}
                        on_change={on_concentration}
                    />
                    <Field
                        id="dna-length"
                        label="DNA Length (bp)"
                        placeholder="1000"
                        value={form.length.clone()}
                        on_change={on_length}
                    />
                </div>
                <button type="submit" class="run-button">{ "Convert" }</button>
            </form>
            <ResultPanel id="dna-conc-result-wrapper" {view} />
        </Card>
    }
}

#[function_component(UlToMmolCalculator)]
pub fn ul_to_mmol_calculator() -> Html {
    let form = use_state(UlToMmolForm::default);
    let (view, submit) = use_calculator::<UlToMmolRequest>();

    let on_volume = field_setter(&form, |f, v| f.volume = v);
    let on_molarity = field_setter(&form, |f, v| f.molarity = v);

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(form.request());
        })
    };

    html! {
        <Card title={Endpoint::UlToMmol.title()} hint="Volume of a solution of known molarity">
            <form id="ul-to-mmol-form" onsubmit={on_submit}>
                <div class="field-row">
                    <Field
                        id="ul-volume"
                        label="Volume (µL)"
                        placeholder="250"
                        value={form.volume.clone()}
                        on_change={on_volume}
                    />
                    <Field
                        id="ul-molarity"
                        label="Molarity (mol/L)"
                        placeholder="0.5"
                        value={form.molarity.clone()}
                        on_change={on_molarity}
                    />
                </div>
                <button type="submit" class="run-button">{ "Convert" }</button>
            </form>
            <ResultPanel id="ul-to-mmol-result-wrapper" {view} />
        </Card>
    }
}
