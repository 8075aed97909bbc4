//! Shared page shell for every server-rendered page.
//!
//! All fragments are maud `Markup`; pages compose this shell with their own
//! body and optional page script.

use maud::{html, Markup, PreEscaped, DOCTYPE};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/curriculo", "Currículo"),
    ("/projetos", "Projetos"),
    ("/contato", "Contato"),
];

pub fn page_shell(title: &str, active: &str, content: Markup) -> Markup {
    page_shell_with_script(title, active, content, None)
}

pub fn page_shell_with_script(
    title: &str,
    active: &str,
    content: Markup,
    page_script: Option<&'static str>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                nav.navbar {
                    a.navbar-brand href="/" { "Natan Dias" }
                    div.navbar-links {
                        @for (href, label) in NAV_ITEMS {
                            a.nav-link.active[*href == active] href=(href) { (label) }
                        }
                    }
                }
                main.page-content {
                    (content)
                }
                footer.footer {
                    p { "© 2025 Natan Dias — Portfólio" }
                }
                script { (PreEscaped(REVEAL_JS)) }
                @if let Some(js) = page_script {
                    script { (PreEscaped(js)) }
                }
            }
        }
    }
}

/// Staggered reveal for elements carrying `data-reveal`.
///
/// Prefers IntersectionObserver; a bounded timeout still marks every item
/// visible when the observer is unavailable, so the animation can never
/// hide content. Cosmetic only.
const REVEAL_JS: &str = r#"
(function () {
  var items = document.querySelectorAll('[data-reveal]');
  function show(el) { el.classList.add('visible'); }
  if ('IntersectionObserver' in window) {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          show(entry.target);
          observer.unobserve(entry.target);
        }
      });
    }, { threshold: 0.1, rootMargin: '0px 0px -100px 0px' });
    items.forEach(function (el) { observer.observe(el); });
  }
  setTimeout(function () {
    var pending = document.querySelectorAll('[data-reveal]:not(.visible)');
    pending.forEach(function (el, i) {
      setTimeout(function () { show(el); }, i * 100);
    });
  }, 1000);
})();
"#;

const CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
  background: #0f172a;
  color: #e2e8f0;
  line-height: 1.5;
}

.navbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 16px 32px;
  background: #1e293b;
  position: sticky;
  top: 0;
  z-index: 10;
}

.navbar-brand { color: #f8fafc; font-weight: 700; text-decoration: none; }
.navbar-links { display: flex; gap: 20px; }
.nav-link { color: #94a3b8; text-decoration: none; }
.nav-link.active, .nav-link:hover { color: #3b82f6; }

.page-content { max-width: 1000px; margin: 0 auto; padding: 40px 24px 60px; }
.footer { text-align: center; padding: 24px; color: #64748b; }

.filter-bar { display: flex; flex-wrap: wrap; gap: 10px; margin: 24px 0; }
.filter-btn {
  padding: 8px 18px;
  border-radius: 999px;
  background: #1e293b;
  color: #94a3b8;
  text-decoration: none;
  font-size: 0.9rem;
}
.filter-btn.active { background: #3b82f6; color: #fff; }

.timeline-item, .project-card {
  opacity: 0;
  transform: translateY(16px);
  transition: opacity 0.4s ease-out, transform 0.4s ease-out;
}
.timeline-item.visible, .project-card.visible { opacity: 1; transform: none; }

.timeline-item { position: relative; padding: 0 0 32px 28px; border-left: 2px solid #334155; }
.timeline-dot {
  position: absolute; left: -7px; top: 4px;
  width: 12px; height: 12px; border-radius: 50%; background: #3b82f6;
}
.timeline-card { background: #1e293b; border-radius: 12px; padding: 20px; }
.timeline-badge {
  display: inline-flex; align-items: center; gap: 6px;
  font-size: 0.8rem; color: #3b82f6; margin-bottom: 8px;
}
.timeline-title { color: #f8fafc; }
.timeline-institution { color: #94a3b8; margin-bottom: 6px; }
.timeline-period { display: flex; align-items: center; gap: 6px; color: #64748b; font-size: 0.85rem; }
.timeline-description { margin-top: 10px; }
.timeline-activities { margin: 10px 0 0 18px; color: #cbd5e1; }

.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px; }
.project-card { background: #1e293b; border-radius: 12px; overflow: hidden; }
.project-image { position: relative; height: 160px; background: #0f172a; }
.project-image img { width: 100%; height: 100%; object-fit: cover; }
.project-image-placeholder {
  height: 100%; display: flex; align-items: center; justify-content: center; color: #334155;
}
.project-featured-badge {
  position: absolute; top: 10px; right: 10px;
  background: #f59e0b; color: #0f172a; font-size: 0.75rem;
  padding: 3px 10px; border-radius: 999px; font-weight: 600;
}
.project-content { padding: 18px; }
.project-tech { display: flex; flex-wrap: wrap; gap: 6px; margin: 12px 0; }
.project-tech-tag {
  background: #0f172a; color: #93c5fd; font-size: 0.75rem;
  padding: 3px 10px; border-radius: 999px;
}
.project-footer { display: flex; justify-content: space-between; align-items: center; }
.project-link, .project-view-btn { color: #94a3b8; }
.project-view-btn { background: none; border: none; cursor: pointer; font-size: 0.85rem; }

.modal-overlay {
  display: none; position: fixed; inset: 0;
  background: rgba(15, 23, 42, 0.85); z-index: 20;
  align-items: flex-start; justify-content: center; padding: 48px 16px;
}
.modal-overlay.active { display: flex; }
.modal-box { background: #1e293b; border-radius: 16px; max-width: 680px; width: 100%; padding: 28px; }
.modal-close {
  float: right; background: none; border: none;
  color: #94a3b8; font-size: 1.4rem; cursor: pointer;
}
.modal-tech-tags, .modal-features { margin-top: 10px; }
.modal-actions { display: flex; gap: 12px; margin-top: 20px; }

.empty-state { text-align: center; color: #64748b; padding: 40px 0; }
.error-banner {
  background: rgba(239, 68, 68, 0.12); border: 1px solid #ef4444;
  color: #fca5a5; border-radius: 10px; padding: 12px 16px; margin-bottom: 16px;
}
.success-banner {
  background: rgba(16, 185, 129, 0.12); border: 1px solid #10b981;
  color: #6ee7b7; border-radius: 10px; padding: 12px 16px; margin-bottom: 16px;
}

.form-field { margin-bottom: 16px; }
.form-field label { display: block; margin-bottom: 6px; color: #94a3b8; }
.form-field input, .form-field textarea, .form-field select {
  width: 100%; padding: 10px 14px; border-radius: 8px;
  border: 1px solid #334155; background: #0f172a; color: #e2e8f0;
}
.btn-primary {
  background: #3b82f6; color: #fff; border: none;
  padding: 10px 22px; border-radius: 8px; cursor: pointer;
}
.btn-secondary {
  background: #1e293b; color: #cbd5e1; border: 1px solid #334155;
  padding: 8px 16px; border-radius: 8px; cursor: pointer; text-decoration: none;
}

.admin-layout { display: grid; grid-template-columns: 220px 1fr; gap: 24px; }
.admin-nav { display: flex; flex-direction: column; gap: 8px; }
.admin-nav a { color: #94a3b8; text-decoration: none; padding: 8px 12px; border-radius: 8px; }
.admin-nav a.active { background: #1e293b; color: #3b82f6; }
.stat-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-top: 16px; }
.stat-card { background: #1e293b; border-radius: 12px; padding: 20px; text-align: center; }
.stat-value { font-size: 2rem; color: #f8fafc; font-weight: 700; display: block; }
.stat-label { color: #94a3b8; font-size: 0.85rem; }
.item-card { background: #1e293b; border-radius: 12px; padding: 18px; margin-bottom: 12px; }
.item-actions { margin-top: 12px; display: flex; gap: 8px; }
"#;
