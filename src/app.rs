//! Root page component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::anchor_link::AnchorLink;
use crate::components::contact_form::ContactForm;
use crate::components::reveal_section::RevealSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_nav::{NavLink, SiteNav};
use crate::components::theme_toggle::ThemeToggle;
use crate::config::PageConfig;
use crate::util::{reveal, theme};

const OWNER: &str = "Ada Lovelace";

const NAV_LINKS: &[NavLink] = &[("#about", "About"), ("#projects", "Projects"), ("#contact", "Contact")];

struct Project {
    title: &'static str,
    summary: &'static str,
    href: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Analytical Engine Notes",
        summary: "Annotated translation of Menabrea's memoir, with the first published algorithm.",
        href: "https://example.com/notes",
    },
    Project {
        title: "Bernoulli Tables",
        summary: "Step-by-step computation of Bernoulli numbers on the Engine.",
        href: "https://example.com/bernoulli",
    },
    Project {
        title: "Poetical Science",
        summary: "Essays on imagination as a tool for mathematics.",
        href: "https://example.com/essays",
    },
];

/// Root page component.
///
/// Restores the stored theme, provides `PageConfig` and the theme signal as
/// context, and starts the reveal observer once the view is mounted.
#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    provide_meta_context();

    let current_theme = RwSignal::new(theme::restore(&config.theme_storage_key));
    let reveal_settings = reveal::RevealSettings::from_config(&config);
    provide_context(config);
    provide_context(current_theme);

    Effect::new(move || match reveal::install(&reveal_settings) {
        Ok(count) => log::debug!("reveal: {count} section(s) armed"),
        Err(err) => log::warn!("reveal: observer not installed: {err}"),
    });

    view! {
        <Title text=format!("{OWNER} · Portfolio")/>
        <Meta name="description" content="Projects, writing, and a way to get in touch."/>

        <header class="site-header">
            <AnchorLink href="#top" class="brand">{OWNER}</AnchorLink>
            <SiteNav links=NAV_LINKS/>
            <ThemeToggle/>
        </header>

        <main id="top">
            <section class="hero">
                <h1>{OWNER}</h1>
                <p class="hero__tagline">"Mathematician. Writer. First programmer."</p>
                <AnchorLink href="#contact" class="button">"Get in touch"</AnchorLink>
            </section>

            <RevealSection id="about" title="About">
                <p>
                    "I write about computing machines and the programs they could run, "
                    "long before either was practical."
                </p>
            </RevealSection>

            <RevealSection id="projects" title="Projects">
                <ul class="projects">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! {
                                <li class="project-card">
                                    <h3>
                                        <a href=p.href target="_blank" rel="noopener">{p.title}</a>
                                    </h3>
                                    <p>{p.summary}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </RevealSection>

            <RevealSection id="contact" title="Contact">
                <ContactForm/>
            </RevealSection>
        </main>

        <SiteFooter owner=OWNER/>
    }
}
