// Static portal content.
// - Company blurb and privacy statement shown above the section panes.
// - Per-section tables: privacy documents, security features, certifications.
// - Privacy officer contact card shown in the side panel.

pub const COMPANY_NAME: &str = "Osano";
pub const COMPANY_BLURB: &str = "Osano is a leading privacy platform that helps organizations manage consent, \
data rights, and privacy compliance. Our comprehensive solution enables businesses to build trust \
with their users through transparent privacy practices.";
pub const COMPANY_PRIVACY_EMAIL: &str = "privacy@osano.com";
pub const COMPANY_PRIVACY_POLICY_URL: &str = "https://www.osano.com/privacy";

pub const PRIVACY_STATEMENT: [&str; 3] = [
    "At Osano, your privacy is paramount. We're committed to \"Visible Privacy\" - being transparent \
about how we collect, use, and protect your personal information.",
    "We build trust through transparency and accountability, ensuring you feel confident when using \
our services. Our approach exceeds regulatory compliance by providing clear information about your \
privacy rights and meaningful control over your data.",
    "We believe strong privacy practices create a secure online environment, fostering relationships \
built on trust and respect where you feel safe and valued.",
];

pub const COOKIES_INTRO: &str =
    "Manage your cookie preferences here. We use cookies to enhance your browsing experience.";

pub const RIGHTS_INTRO: &str = "By using the form below, you can exercise your right to know and \
obtain communication with regard to the purposes for which your personal data is processed, where \
possible the period for which your personal data is processed, the recipients of the personal data, \
the logic involved in any automatic personal data processing and, at least when based on profiling, \
the consequences of such processing.";

pub const POLICIES_INTRO: &str = "Access and download our privacy policy and other related \
documents. These documents outline our commitments, practices, and legal terms regarding data \
privacy and protection.";

pub const SECURITY_INTRO: &str = "We implement multiple layers of security to protect your data and \
ensure the integrity of our platform. Below are the key security features and certifications that \
safeguard your information.";

pub const TRANSPARENCY_INTRO: &str =
    "View our latest transparency reports to see how we handle privacy and security.";

pub const UUID_EXPLANATION: &str = "This UUID is your unique identifier in our system. If you ever \
need to contact us about your personal data, please provide this UUID to help us locate and process \
your information more efficiently.";

#[derive(Debug, Clone, Copy)]
pub struct PrivacyDocument {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const PRIVACY_DOCUMENTS: [PrivacyDocument; 5] = [
    PrivacyDocument {
        title: "Data Licensing Agreement",
        description: "Terms governing the licensing and use of data between parties.",
        url: "https://osano.trusthub.com/data-license",
    },
    PrivacyDocument {
        title: "Cookie Policy",
        description: "Details on how we use cookies and similar technologies on our website.",
        url: "https://osano.trusthub.com/cookies",
    },
    PrivacyDocument {
        title: "Service Level Statement",
        description: "Our commitment to service availability and performance standards.",
        url: "https://osano.trusthub.com/sls",
    },
    PrivacyDocument {
        title: "Terms of Service",
        description: "Enterprise and Premier Plans terms and conditions for using our services.",
        url: "https://osano.trusthub.com/terms-enterprise",
    },
    PrivacyDocument {
        title: "Privacy for Job Applicants",
        description: "How we handle personal information during the recruitment process.",
        url: "https://osano.trusthub.com/privacy-job-applicants",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SecurityFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub active: bool,
}

pub const SECURITY_FEATURES: [SecurityFeature; 6] = [
    SecurityFeature {
        title: "End-to-End Encryption",
        description: "All data is encrypted in transit and at rest using industry-standard AES-256 encryption.",
        active: true,
    },
    SecurityFeature {
        title: "Multi-Factor Authentication",
        description: "Secure your account with an additional layer of security beyond just a password.",
        active: true,
    },
    SecurityFeature {
        title: "SOC 2 Type II Compliance",
        description: "Our systems and processes are regularly audited for security, availability, and confidentiality.",
        active: true,
    },
    SecurityFeature {
        title: "GDPR Compliance",
        description: "Our platform is designed to help you meet GDPR requirements for data protection.",
        active: true,
    },
    SecurityFeature {
        title: "Vulnerability Scanning",
        description: "Regular automated scanning of our systems to identify and address potential security vulnerabilities.",
        active: true,
    },
    SecurityFeature {
        title: "Secure Data Centers",
        description: "Our infrastructure is hosted in SOC 2 compliant data centers with physical security measures.",
        active: true,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
}

pub const CERTIFICATIONS: [Certification; 4] = [
    Certification {
        name: "SOC 2 Type II",
        description: "Audited for security, availability, and confidentiality controls",
        status: "Certified",
    },
    Certification {
        name: "ISO 27001",
        description: "Information security management system certification",
        status: "Certified",
    },
    Certification {
        name: "GDPR Compliance",
        description: "Compliant with EU General Data Protection Regulation",
        status: "Compliant",
    },
    Certification {
        name: "CCPA Compliance",
        description: "Compliant with California Consumer Privacy Act",
        status: "Compliant",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct PrivacyOfficer {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const PRIVACY_OFFICER: PrivacyOfficer = PrivacyOfficer {
    name: "Dr. Sarah Johnson",
    title: "Chief Privacy Officer",
    email: "privacy@trusthub.com",
    phone: "+1 (555) 123-4567",
};
