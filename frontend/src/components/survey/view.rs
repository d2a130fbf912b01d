//! View rendering for the survey form component.
//!
//! The form is one card: identification (name + sector, when the schema
//! collects it), the NPS slider, the sub-metric sliders (schema v2), the
//! comment box, and the submit button. The inline error line mirrors the
//! last validation or submission failure.

use super::messages::Msg;
use super::state::SurveyFormComponent;
use common::model::response::{Metric, MAX_COMMENT_LEN, MAX_SCORE};
use common::model::sector::Sector;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &SurveyFormComponent, ctx: &Context<SurveyFormComponent>) -> Html {
    let link = ctx.link();
    let schema = ctx.props().schema;

    html! {
        <div class="survey-card">
            {
                if schema.collects_identity() {
                    build_identity_section(component, link)
                } else {
                    html! {}
                }
            }

            <h3 class="question">
                {"De 0 a 10, o quanto você recomendaria a Escrita Contabilidade para um amigo ou colega?"}
            </h3>
            { score_slider("Arraste para escolher sua nota:", component.nps, link.callback(|e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::UpdateNps(input.value().parse().unwrap_or(MAX_SCORE))
            })) }

            {
                if schema.collects_metrics() {
                    build_metrics_section(component, link)
                } else {
                    html! {}
                }
            }

            { build_comment_section(component, link) }

            {
                if let Some(error) = &component.error {
                    html! { <p class="form-error">{ error }</p> }
                } else {
                    html! {}
                }
            }

            <button
                class="submit-btn"
                disabled={component.submitting}
                onclick={link.callback(|_| Msg::Submit)}
            >
                {
                    if component.submitting {
                        "Registrando sua resposta..."
                    } else {
                        "Enviar Resposta"
                    }
                }
            </button>
        </div>
    }
}

fn build_identity_section(
    component: &SurveyFormComponent,
    link: &Scope<SurveyFormComponent>,
) -> Html {
    html! {
        <div class="identity-section">
            <h3>{"Identificação"}</h3>
            <div class="field-row">
                <label class="field">
                    {"Seu nome ou empresa:"}
                    <input
                        type="text"
                        placeholder="Ex: João Silva / Empresa ABC"
                        value={component.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateName(input.value())
                        })}
                    />
                </label>
                <label class="field">
                    {"Qual setor te atendeu?"}
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::UpdateSector(select.value())
                    })}>
                        {
                            for Sector::ALL.iter().map(|sector| html! {
                                <option
                                    value={sector.label()}
                                    selected={*sector == component.sector}
                                >
                                    { sector.label() }
                                </option>
                            })
                        }
                    </select>
                </label>
            </div>
        </div>
    }
}

fn build_metrics_section(
    component: &SurveyFormComponent,
    link: &Scope<SurveyFormComponent>,
) -> Html {
    html! {
        <div class="metrics-section">
            <h3>{"Avalie também os pontos abaixo:"}</h3>
            {
                for Metric::ALL.iter().map(|metric| {
                    let m = *metric;
                    score_slider(m.label(), component.metrics.get(m), link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateMetric(m, input.value().parse().unwrap_or(MAX_SCORE))
                    }))
                })
            }
        </div>
    }
}

fn build_comment_section(
    component: &SurveyFormComponent,
    link: &Scope<SurveyFormComponent>,
) -> Html {
    html! {
        <label class="field comment-field">
            {"Conte-nos o motivo da sua nota (opcional):"}
            <textarea
                placeholder="Fale sobre sua experiência..."
                maxlength={MAX_COMMENT_LEN.to_string()}
                value={component.comment.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::UpdateComment(input.value())
                })}
            />
        </label>
    }
}

/// One labelled 0..=10 discrete slider with its current value alongside.
fn score_slider(label: &'static str, value: u8, oninput: Callback<InputEvent>) -> Html {
    html! {
        <label class="field score-field">
            { label }
            <div class="score-slider">
                <input
                    type="range"
                    min="0"
                    max="10"
                    step="1"
                    value={value.to_string()}
                    oninput={oninput}
                />
                <span class="score-value">{ value }</span>
            </div>
        </label>
    }
}
