// src/modules/contact/adapter/incoming/web/pages.rs

use actix_web::{get, post, web, HttpResponse, Responder};
use maud::{html, Markup};
use tracing::error;

use crate::modules::contact::domain::ContactForm;
use crate::shared::html::page_shell;
use crate::AppState;

const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Entrarei em contato em breve.";
const DELIVERY_ERROR_MESSAGE: &str = "Erro ao enviar mensagem. Tente novamente.";

/// Outcome banner shown above the form after a submit.
enum Banner {
    None,
    Success,
    Error(String),
}

#[get("/contato")]
pub async fn contato_page() -> impl Responder {
    respond(render_contact_page(&ContactForm::default(), &Banner::None))
}

#[post("/contato")]
pub async fn contato_submit(
    form: web::Form<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    let message = match form.clone().validated() {
        Ok(message) => message,
        Err(err) => {
            // Validation failures never reach the delivery port; the
            // form is re-rendered with the typed values kept.
            return respond(render_contact_page(&form, &Banner::Error(err.to_string())));
        }
    };

    match data.contact_delivery.deliver(&message).await {
        Ok(()) => respond(render_contact_page(&ContactForm::default(), &Banner::Success)),
        Err(err) => {
            error!(error = %err, "contact delivery failed");
            respond(render_contact_page(
                &form,
                &Banner::Error(DELIVERY_ERROR_MESSAGE.to_string()),
            ))
        }
    }
}

fn respond(body: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page_shell("Contato — Natan Dias", "/contato", body).into_string())
}

fn render_contact_page(form: &ContactForm, banner: &Banner) -> Markup {
    html! {
        section.contact-section {
            h1 { "Contato" }
            p { "Fale comigo sobre projetos, oportunidades ou dúvidas." }

            @match banner {
                Banner::Success => { div.success-banner { (SUCCESS_MESSAGE) } }
                Banner::Error(message) => { div.error-banner { (message) } }
                Banner::None => {}
            }

            form.contact-form method="post" action="/contato" {
                div.form-field {
                    label for="nome" { "Nome" }
                    input #nome type="text" name="nome" value=(form.nome) required;
                }
                div.form-field {
                    label for="email" { "Email" }
                    input #email type="email" name="email" value=(form.email) required;
                }
                div.form-field {
                    label for="telefone" { "Telefone (opcional)" }
                    input #telefone type="tel" name="telefone" value=(form.telefone)
                        placeholder="(11) 91234-5678";
                }
                div.form-field {
                    label for="assunto" { "Assunto" }
                    input #assunto type="text" name="assunto" value=(form.assunto) required;
                }
                div.form-field {
                    label for="mensagem" { "Mensagem" }
                    textarea #mensagem name="mensagem" rows="6" required { (form.mensagem) }
                }
                button.btn-primary type="submit" { "Enviar mensagem" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_renders_without_banner() {
        let page = render_contact_page(&ContactForm::default(), &Banner::None).into_string();
        assert!(!page.contains("success-banner"));
        assert!(!page.contains("error-banner"));
    }

    #[test]
    fn error_banner_keeps_the_typed_values() {
        let form = ContactForm {
            nome: "Maria Souza".into(),
            email: "maria@example.com".into(),
            telefone: "".into(),
            assunto: "Orçamento".into(),
            mensagem: "Olá!!".into(),
        };
        let banner = Banner::Error("A mensagem deve ter pelo menos 10 caracteres.".into());
        let page = render_contact_page(&form, &banner).into_string();

        assert!(page.contains("error-banner"));
        assert!(page.contains("Maria Souza"));
        assert!(page.contains("Orçamento"));
    }

    #[test]
    fn success_banner_clears_the_form() {
        let page = render_contact_page(&ContactForm::default(), &Banner::Success).into_string();
        assert!(page.contains(SUCCESS_MESSAGE));
        assert!(page.contains(r#"value="""#));
    }
}
