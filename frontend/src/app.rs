use crate::components::survey::SurveyFormComponent;
use common::model::schema::SchemaVersion;
use common::requests::SchemaInfoResponse;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

pub enum Msg {
    SetSchema(SchemaVersion),
}

/// Page root: renders the header and the survey form.
///
/// On first render it asks the backend which row schema is active so the form
/// shows the matching field set; until the answer arrives (or if the request
/// fails) the form runs with the default v1 layout.
pub struct App {
    schema: SchemaVersion,
    loaded: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            schema: SchemaVersion::default(),
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSchema(schema) => {
                self.schema = schema;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <div class="header-container">
                    <h1 class="header-title">{"Pesquisa de Satisfação"}</h1>
                    <p class="header-subtitle">{"Sua opinião ajuda a Escrita Contabilidade a crescer"}</p>
                </div>
                <SurveyFormComponent schema={self.schema} />
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get("/api/responses/schema").send().await;

                match response {
                    Ok(resp) if resp.status() == 200 => {
                        if let Ok(info) = resp.json::<SchemaInfoResponse>().await {
                            link.send_message(Msg::SetSchema(info.schema));
                        }
                    }
                    _ => {
                        gloo_console::warn!(
                            "não foi possível consultar o schema ativo; o formulário usa v1"
                        );
                    }
                }
            });
        }
    }
}
