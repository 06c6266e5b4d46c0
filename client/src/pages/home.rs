//! Landing page.
//!
//! Sections reveal on scroll; without script they render fully visible.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;

const CAPABILITIES: &[(&str, &str)] = &[
    ("Custom wire harnesses", "Built to your drawings, from single prototypes to full production runs."),
    ("Cable assemblies", "Overmolded, shielded and high-current assemblies with full traceability."),
    ("Control panel wiring", "Cabinet wiring to IEC and UL standards, delivered tested and documented."),
    ("Design support", "DFM reviews, connector selection and schematic clean-up before release."),
];

const INDUSTRIES: &[&str] = &[
    "Agricultural machinery",
    "Construction equipment",
    "Rail",
    "Industrial automation",
    "Energy storage",
    "Medical devices",
];

const STATS: &[(&str, &str)] = &[
    ("25+", "years of harness manufacturing"),
    ("1.2M", "harnesses shipped last year"),
    ("99.8%", "first-pass test yield"),
    ("48 h", "prototype turnaround"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Wireworks Harness Systems | Custom wire harnesses"/>
        <div class="home">
            <Reveal anchor="hero" section_class="hero">
                <h1>"Wire harnesses built right the first time"</h1>
                <p class="hero__lead">
                    "From prototype to production, we turn your schematics into tested, documented harnesses and cable assemblies."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/contact">
                        "Request a quote"
                    </a>
                    <a class="btn" href="/schematic">
                        "Explore a harness"
                    </a>
                </div>
            </Reveal>

            <Reveal anchor="value" section_class="value">
                <h2>"One partner from drawing to delivery"</h2>
                <p>
                    "Engineering, sourcing, assembly and 100% electrical testing under one roof, so your harness arrives ready to install."
                </p>
            </Reveal>

            <Reveal anchor="capabilities" section_class="capabilities">
                <h2>"Capabilities"</h2>
                <div class="card-grid">
                    {CAPABILITIES
                        .iter()
                        .map(|&(title, body)| {
                            view! {
                                <article class="card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>

            <Reveal anchor="industries" section_class="industries">
                <h2>"Industries we serve"</h2>
                <ul class="pill-list">
                    {INDUSTRIES.iter().map(|name| view! { <li class="pill">{*name}</li> }).collect_view()}
                </ul>
            </Reveal>

            <Reveal anchor="stats" section_class="stats">
                <dl class="stats__grid">
                    {STATS
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <div class="stats__item">
                                    <dt>{value}</dt>
                                    <dd>{label}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </Reveal>

            <Reveal anchor="cta" section_class="cta">
                <h2>"Have a drawing ready?"</h2>
                <p>"Send it over and get a quote within two business days."</p>
                <a class="btn btn--primary" href="/contact">
                    "Start your project"
                </a>
            </Reveal>
        </div>
    }
}
