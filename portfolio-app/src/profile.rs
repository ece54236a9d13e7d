pub const OWNER_NAME: &str = "Rohan Benjamin";
pub const OWNER_ROLE: &str = "Full-Stack Developer";
pub const GREETING: &str = "👋 Hi, I'm a Passionate Web Developer";
pub const EDUCATION: &str = "Higher National Diploma in IT";
pub const INSTITUTE: &str = "SLIATE";

pub const PROFILE_IMAGE: &str = "/CV1.jpg";
pub const ROBOT_IMAGE: &str = "/robot.png";
pub const RESUME_PATH: &str = "/My%20CV.pdf";
pub const RESUME_FILENAME: &str = "RohanBenjamin_CV.pdf";

pub const GITHUB_URL: &str = "https://github.com/BenjaminKing0520";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/share/17vLoetNB2/";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/rohan-benjamin-708909289";
pub const WHATSAPP_URL: &str = "https://wa.me/+94755391504";
pub const PHONE_URL: &str = "tel:+94755391504";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const FOOTER_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Facebook", icon: "f", url: FACEBOOK_URL },
    SocialLink { label: "LinkedIn", icon: "in", url: LINKEDIN_URL },
    SocialLink { label: "WhatsApp", icon: "✆", url: WHATSAPP_URL },
    SocialLink { label: "Phone", icon: "☎", url: PHONE_URL },
];

pub const ABOUT_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", icon: "⌥", url: GITHUB_URL },
    SocialLink { label: "LinkedIn", icon: "in", url: LINKEDIN_URL },
    SocialLink { label: "WhatsApp", icon: "✆", url: WHATSAPP_URL },
];
