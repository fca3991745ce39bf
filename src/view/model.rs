use url::Url;

use crate::nav::section::SectionKey;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything derived from the content document that the view layer paints.
pub struct PageView {
    /// Top navigation bar.
    pub nav: NavBarView,
    /// Page sections in paint order.
    pub sections: Vec<Section>,
    /// Bottom tab bar entries.
    pub tabs: Vec<TabView>,
    /// Floating messaging button target.
    pub floating_contact: Option<Url>,
}

impl PageView {
    /// The hero section, if present.
    pub fn hero(&self) -> Option<&HeroView> {
        self.sections.iter().find_map(|s| match s {
            Section::Hero(v) => Some(v),
            _ => None,
        })
    }

    /// The about section, if present.
    pub fn about(&self) -> Option<&AboutView> {
        self.sections.iter().find_map(|s| match s {
            Section::About(v) => Some(v),
            _ => None,
        })
    }

    /// The skills section, if present.
    pub fn skills(&self) -> Option<&SkillsView> {
        self.sections.iter().find_map(|s| match s {
            Section::Skills(v) => Some(v),
            _ => None,
        })
    }

    /// The work section, if present.
    pub fn work(&self) -> Option<&WorkView> {
        self.sections.iter().find_map(|s| match s {
            Section::Work(v) => Some(v),
            _ => None,
        })
    }

    /// The contact section, if present.
    pub fn contact(&self) -> Option<&ContactView> {
        self.sections.iter().find_map(|s| match s {
            Section::Contact(v) => Some(v),
            _ => None,
        })
    }

    /// The footer, if present.
    pub fn footer(&self) -> Option<&FooterView> {
        self.sections.iter().find_map(|s| match s {
            Section::Footer(v) => Some(v),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One presentational section.
pub enum Section {
    /// Name, role, tagline, calls to action.
    Hero(HeroView),
    /// Portrait, biography, experience.
    About(AboutView),
    /// Skill groups.
    Skills(SkillsView),
    /// Project cards.
    Work(WorkView),
    /// Direct contact channels and the contact form.
    Contact(ContactView),
    /// Closing credits and social links.
    Footer(FooterView),
}

impl Section {
    /// Element id the section is rendered under, if it is an anchor target.
    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            Self::Hero(_) => Some(SectionKey::Home.id()),
            Self::About(_) => Some(SectionKey::About.id()),
            Self::Skills(_) => Some("skills"),
            Self::Work(_) => Some(SectionKey::Work.id()),
            Self::Contact(_) => Some(SectionKey::Contact.id()),
            Self::Footer(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A labelled link.
pub struct LinkView {
    /// Visible label.
    pub label: String,
    /// Link target (anchor or absolute URL).
    pub href: String,
}

impl LinkView {
    pub(crate) fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Top navigation bar.
pub struct NavBarView {
    /// Owner name shown as the brand.
    pub brand: Option<String>,
    /// In-page section links.
    pub links: Vec<LinkView>,
    /// "Collaborate" messaging link.
    pub collaborate: Option<Url>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Bottom tab bar entry.
pub struct TabView {
    /// Section the tab tracks.
    pub key: SectionKey,
    /// Visible label.
    pub label: &'static str,
    /// In-page anchor.
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A social profile link.
pub struct SocialLink {
    /// Network name, for example `github`.
    pub network: &'static str,
    /// Profile URL.
    pub url: Url,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// An image reference with an optional substitute on load failure.
pub struct ImageRef {
    /// Primary source.
    pub src: String,
    /// Alternative text.
    pub alt: Option<String>,
    /// Source to swap in when `src` fails to load.
    pub fallback: Option<String>,
}

impl ImageRef {
    /// Source to show after `src` failed to load.
    pub fn on_error(&self) -> Option<&str> {
        self.fallback.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Hero section.
pub struct HeroView {
    /// Role line.
    pub role: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Primary call to action ("View Projects").
    pub cta: LinkView,
    /// Social buttons (github, linkedin).
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// About section.
pub struct AboutView {
    /// Portrait image.
    pub portrait: ImageRef,
    /// Location card text.
    pub location: Option<String>,
    /// Biography.
    pub about: Option<String>,
    /// Work history entries.
    pub experience: Vec<ExperienceView>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One numbered work history entry.
pub struct ExperienceView {
    /// Two-digit position number, `01` first.
    pub ordinal: String,
    /// Position title.
    pub title: String,
    /// Organization.
    pub company: String,
    /// Period label.
    pub period: String,
    /// Description.
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Skills section.
pub struct SkillsView {
    /// Skill groups in document order.
    pub groups: Vec<SkillGroupView>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One skill group card.
pub struct SkillGroupView {
    /// Group label.
    pub category: String,
    /// Card icon.
    pub icon: SkillIcon,
    /// Skill chips.
    pub items: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Icon chosen from a skill category label.
pub enum SkillIcon {
    /// Frontend categories.
    Palette,
    /// Backend categories.
    Database,
    /// Everything else.
    Code,
}

impl SkillIcon {
    /// Icon for `category` (case-insensitive substring match).
    pub fn for_category(category: &str) -> Self {
        let c = category.to_lowercase();
        if c.contains("frontend") {
            Self::Palette
        } else if c.contains("backend") {
            Self::Database
        } else {
            Self::Code
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Work section.
pub struct WorkView {
    /// Project cards in document order.
    pub projects: Vec<ProjectView>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One project card.
pub struct ProjectView {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Technology chips.
    pub tech: Vec<String>,
    /// Cover image source; no fallback.
    pub image: Option<String>,
    /// Card link target.
    pub url: Option<Url>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Contact section.
pub struct ContactView {
    /// Email address shown.
    pub email: Option<String>,
    /// `mailto:` link for the email address.
    pub mailto: Option<String>,
    /// Phone number shown, `+<digits>`.
    pub phone_display: Option<String>,
    /// Messaging link without a pre-filled message.
    pub direct: Option<Url>,
    /// Submit button label.
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Page footer.
pub struct FooterView {
    /// Owner name.
    pub name: Option<String>,
    /// Copyright line.
    pub copyright: String,
    /// Social links; `#` when a network is missing.
    pub links: Vec<LinkView>,
}
