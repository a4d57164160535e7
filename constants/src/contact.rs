/// Label on the contact dropdown button.
pub const CONTACT_BUTTON_LABEL: &str = "GET IN TOUCH";

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "WhatsApp",
        url: "https://wa.me/923177045793",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/arsalanzafar",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/naveed-agent",
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/chmohsin.bhowana",
    },
];
