use url::Url;

use crate::contact::deeplink::messaging_link;
use crate::content::model::{ContentDocument, Profile, Project};
use crate::foundation::config::SiteConfig;
use crate::nav::section::SectionKey;
use crate::view::model::{
    AboutView, ContactView, ExperienceView, FooterView, HeroView, ImageRef, LinkView, NavBarView,
    PageView, ProjectView, Section, SkillGroupView, SkillIcon, SkillsView, SocialLink, TabView,
    WorkView,
};

const HERO_SOCIALS: [&str; 2] = ["github", "linkedin"];
const FOOTER_SOCIALS: [(&str, &str); 3] = [
    ("Github", "github"),
    ("LinkedIn", "linkedin"),
    ("Twitter", "twitter"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
/// Inputs of the projection that do not come from the document.
pub struct ViewContext {
    /// Messaging service base URL.
    pub messaging_base: String,
    /// Portrait image source.
    pub portrait: String,
    /// Portrait substitute on load failure.
    pub portrait_fallback: String,
    /// Year printed in the footer.
    pub year: i32,
}

impl ViewContext {
    /// Context from site configuration and the current year.
    pub fn from_config(config: &SiteConfig, year: i32) -> Self {
        Self {
            messaging_base: config.contact.messaging_base.clone(),
            portrait: config.images.portrait.clone(),
            portrait_fallback: config.images.portrait_fallback.clone(),
            year,
        }
    }
}

/// Project a content document into the page view.
///
/// Pure and deterministic: the same document and context always give an equal view. Arrays are
/// rendered in document order; missing or empty fields render as absent.
#[tracing::instrument(skip_all, fields(projects = doc.projects.len()))]
pub fn project(doc: &ContentDocument, ctx: &ViewContext) -> PageView {
    let profile = &doc.profile;
    let direct = messaging_link(profile, &ctx.messaging_base);
    let has_skills = !doc.skills.is_empty();

    let mut sections = Vec::with_capacity(6);
    sections.push(Section::Hero(hero(profile)));
    sections.push(Section::About(about(doc, ctx)));
    if has_skills {
        sections.push(Section::Skills(skills(doc)));
    }
    sections.push(Section::Work(WorkView {
        projects: doc.projects.iter().map(project_card).collect(),
    }));
    sections.push(Section::Contact(contact(profile, direct.clone())));
    sections.push(Section::Footer(footer(profile, ctx.year)));

    PageView {
        nav: nav_bar(profile, has_skills, direct.clone()),
        sections,
        tabs: SectionKey::TABS
            .iter()
            .map(|&key| TabView {
                key,
                label: key.label(),
                href: key.anchor(),
            })
            .collect(),
        floating_contact: direct,
    }
}

fn text(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn parse_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!(value = raw, "dropping malformed link: {e}");
            None
        }
    }
}

fn nav_bar(profile: &Profile, has_skills: bool, collaborate: Option<Url>) -> NavBarView {
    let mut links = vec![LinkView::new("About", SectionKey::About.anchor())];
    if has_skills {
        links.push(LinkView::new("Skills", "#skills"));
    }
    links.push(LinkView::new("Work", SectionKey::Work.anchor()));
    links.push(LinkView::new("Contact", SectionKey::Contact.anchor()));
    NavBarView {
        brand: text(&profile.name),
        links,
        collaborate,
    }
}

fn hero(profile: &Profile) -> HeroView {
    HeroView {
        role: text(&profile.role),
        tagline: text(&profile.tagline),
        cta: LinkView::new("View Projects", SectionKey::Work.anchor()),
        socials: HERO_SOCIALS
            .iter()
            .filter_map(|&network| {
                let url = parse_url(profile.social(network)?)?;
                Some(SocialLink { network, url })
            })
            .collect(),
    }
}

fn about(doc: &ContentDocument, ctx: &ViewContext) -> AboutView {
    AboutView {
        portrait: ImageRef {
            src: ctx.portrait.clone(),
            alt: text(&doc.profile.name),
            fallback: Some(ctx.portrait_fallback.clone()),
        },
        location: text(&doc.profile.location),
        about: text(&doc.profile.about),
        experience: doc
            .experience
            .iter()
            .enumerate()
            .map(|(i, e)| ExperienceView {
                ordinal: format!("{:02}", i + 1),
                title: e.title.clone(),
                company: e.company.clone(),
                period: e.period.clone(),
                description: e.description.clone(),
            })
            .collect(),
    }
}

fn skills(doc: &ContentDocument) -> SkillsView {
    SkillsView {
        groups: doc
            .skills
            .iter()
            .map(|g| SkillGroupView {
                category: g.category.clone(),
                icon: SkillIcon::for_category(&g.category),
                items: g.items.clone(),
            })
            .collect(),
    }
}

fn project_card(p: &Project) -> ProjectView {
    ProjectView {
        title: p.title.clone(),
        description: p.description.clone(),
        tech: p.tech.clone(),
        image: text(&p.image).map(|raw| card_image(&raw)),
        url: p.url.as_deref().and_then(parse_url),
    }
}

/// Unsplash covers are requested at card size; other sources are used as given.
fn card_image(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.host_str().is_some_and(|h| h.contains("unsplash")) => {
            url.query_pairs_mut()
                .append_pair("w", "600")
                .append_pair("q", "70");
            url.to_string()
        }
        _ => raw.to_string(),
    }
}

fn contact(profile: &Profile, direct: Option<Url>) -> ContactView {
    let email = text(&profile.email);
    ContactView {
        mailto: email.as_ref().map(|e| format!("mailto:{e}")),
        email,
        phone_display: profile.phone_digits().map(|d| format!("+{d}")),
        direct,
        submit_label: "Initiate Project",
    }
}

fn footer(profile: &Profile, year: i32) -> FooterView {
    FooterView {
        name: text(&profile.name),
        copyright: format!("© {year} Aesthetic Precision Engineered."),
        links: FOOTER_SOCIALS
            .iter()
            .map(|&(label, network)| {
                let href = profile
                    .social(network)
                    .and_then(parse_url)
                    .map_or_else(|| "#".to_string(), |u| u.to_string());
                LinkView::new(label, href)
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/project.rs"]
mod tests;
