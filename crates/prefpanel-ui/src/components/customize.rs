use crate::app::ControllerHandle;
use crate::core::config::DEFAULT_ACCENT;
use crate::core::fonts::FontFamily;
use crate::core::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CustomizePanelProps {
    pub(crate) controller: ControllerHandle,
}

#[function_component(CustomizePanel)]
pub(crate) fn customize_panel(props: &CustomizePanelProps) -> Html {
    {
        let controller = props.controller.clone();
        use_effect_with_deps(
            move |_| {
                controller.load_and_apply();
                || ()
            },
            (),
        );
    }

    let config = props.controller.config();
    let on_open = {
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| controller.open_panel())
    };
    let on_close = {
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| controller.close_panel())
    };
    let on_apply = {
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| controller.apply_and_persist())
    };

    html! {
        <>
            <button type="button" class="btn btn-ghost btn-sm" onclick={on_open}>
                {"Customize"}
            </button>
            <div
                id={config.modal_id.clone()}
                class={classes!("modal", "modal-open", config.hidden_class.clone())}
                role="dialog"
                aria-modal="true"
            >
                <div class="modal-box space-y-4">
                    <h3 class="text-lg font-semibold">{"Customize"}</h3>
                    <label class="form-control gap-1">
                        <span class="label-text text-xs">{"Theme"}</span>
                        <select id={config.theme_control_id.clone()} class="select select-bordered select-sm">
                            { for ThemeMode::all().into_iter().map(|mode| html! {
                                <option value={mode.as_str()} selected={mode == ThemeMode::default()}>
                                    {mode.label()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="form-control gap-1">
                        <span class="label-text text-xs">{"Accent"}</span>
                        <input
                            type="color"
                            id={config.accent_control_id.clone()}
                            class="input input-bordered input-sm"
                            value={DEFAULT_ACCENT}
                        />
                    </label>
                    <label class="form-control gap-1">
                        <span class="label-text text-xs">{"Font"}</span>
                        <select id={config.font_control_id.clone()} class="select select-bordered select-sm">
                            { for FontFamily::all().into_iter().map(|family| html! {
                                <option value={family.as_str()} selected={family == FontFamily::default()}>
                                    {family.as_str()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <div class="flex justify-end gap-2">
                        <button type="button" class="btn btn-ghost btn-sm" onclick={on_close}>
                            {"Cancel"}
                        </button>
                        <button type="button" class="btn btn-primary btn-sm" onclick={on_apply}>
                            {"Apply"}
                        </button>
                    </div>
                </div>
            </div>
        </>
    }
}
