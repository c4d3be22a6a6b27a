//! Small shared form controls, styled from the theme tokens.
//!
//! All inputs are controlled: the displayed value always comes from the
//! caller's state, never from the native widget.

use dioxus::prelude::*;

use crate::theme::{color, font, spacing};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let (background, foreground, border) = match variant {
        ButtonVariant::Primary => (color::PRIMARY, color::ON_PRIMARY, color::PRIMARY),
        ButtonVariant::Ghost => ("transparent", color::TEXT_PRIMARY, color::BORDER),
    };
    let opacity = if disabled { "0.5" } else { "1" };

    rsx! {
        button {
            style: "background-color: {background}; color: {foreground}; border: 1px solid {border}; border-radius: 8px; padding: {spacing::MD}; font-size: {font::SIZE_MD}; font-weight: {font::WEIGHT_SEMIBOLD}; width: 100%; opacity: {opacity}; cursor: pointer;",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            style: "display: block; font-size: {font::SIZE_LG}; color: {color::TEXT_SECONDARY}; margin-bottom: {spacing::XS};",
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{value}",
            style: "background-color: {color::SURFACE}; color: {color::TEXT_PRIMARY}; border: 1px solid {color::BORDER}; border-radius: 8px; padding: {spacing::MD}; margin-bottom: {spacing::MD}; font-size: {font::SIZE_MD}; width: 100%; box-sizing: border-box;",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Switch(
    #[props(default)] id: String,
    checked: bool,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            r#type: "checkbox",
            checked: checked,
            style: "width: 1.25rem; height: 1.25rem; accent-color: {color::PRIMARY}; margin-bottom: {spacing::MD};",
            onchange: move |evt| onchange.call(evt),
        }
    }
}
