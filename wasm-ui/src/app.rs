//! Main application component.

use labcalc::ClientConfig;
use yew::prelude::*;

use crate::calculators::{
    DilutionCalculator, DnaConcentrationCalculator, PcrCalculator, UlToMmolCalculator,
};
use crate::client::config_from_global;
use crate::components::ThemeToggle;

/// Add or remove the `dark` class on `<html>`.
fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("no document element to apply theme to");
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        log::warn!("could not switch theme: {:?}", e);
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(config_from_global);
    let dark = use_state(|| false);

    use_effect_with(*dark, |dark| apply_theme(*dark));

    let on_toggle_theme = {
        let dark = dark.clone();
        Callback::from(move |_: ()| dark.set(!*dark))
    };

    html! {
        <ContextProvider<ClientConfig> context={(*config).clone()}>
            <div class="app">
                <header class="header">
                    <div class="header-left">
                        <h1>{ "labcalc" }</h1>
                        <p class="subtitle">{ "Laboratory Unit Conversion Calculators" }</p>
                    </div>
                    <div class="header-right">
                        <ThemeToggle dark={*dark} on_toggle={on_toggle_theme} />
                    </div>
                </header>

                <main class="main">
                    <div class="panels">
                        <PcrCalculator />
                        <DilutionCalculator />
                        <DnaConcentrationCalculator />
                        <UlToMmolCalculator />
                    </div>
                </main>

                <footer class="footer">
                    <div class="footer-row">
                        <span>{ "Calculations are performed by the lab calculation service" }</span>
                    </div>
                    <div class="footer-row">
                        <span class="footer-build">
                            { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                        </span>
                    </div>
                </footer>
            </div>
        </ContextProvider<ClientConfig>>
    }
}
