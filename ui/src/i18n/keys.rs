//! Semantic message keys. Each variant names exactly one Fluent message id,
//! so views can only ask for text that the catalog is checked against.

macro_rules! message_keys {
    ($( $variant:ident => $id:literal ),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKey {
            $( $variant ),+
        }

        impl MessageKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [MessageKey] = &[ $( MessageKey::$variant ),+ ];

            /// The Fluent message id.
            pub const fn id(self) -> &'static str {
                match self {
                    $( MessageKey::$variant => $id ),+
                }
            }
        }
    };
}

message_keys! {
    // Brand / navbar
    BrandName => "brand-name",
    BrandTagline => "brand-tagline",
    NavHome => "nav-home",
    NavWhatIsLia => "nav-what-is-lia",
    NavDemo => "nav-demo",
    NavLanguageSwitch => "nav-language-switch",
    NavLanguageSwitchLabel => "nav-language-switch-label",
    NavThemeToDark => "nav-theme-to-dark",
    NavThemeToLight => "nav-theme-to-light",

    // Hero
    HeroEyebrow => "hero-eyebrow",
    HeroHeadlinePrimary => "hero-headline-primary",
    HeroHeadlineSecondary => "hero-headline-secondary",
    HeroLead => "hero-lead",
    HeroBody => "hero-body",
    HeroCta => "hero-cta",
    HeroScrollHint => "hero-scroll-hint",

    // Features
    FeaturesEyebrow => "features-eyebrow",
    FeaturesTitle => "features-title",
    FeaturesSubtitle => "features-subtitle",
    FeaturesLearnMore => "features-learn-more",
    FeatureMatchingTitle => "feature-matching-title",
    FeatureMatchingBody => "feature-matching-body",
    FeatureCollaborationTitle => "feature-collaboration-title",
    FeatureCollaborationBody => "feature-collaboration-body",
    FeatureAutomationTitle => "feature-automation-title",
    FeatureAutomationBody => "feature-automation-body",

    // Audiences (tabbed)
    AudienceTabApplicants => "audience-tab-applicants",
    AudienceTabSchools => "audience-tab-schools",
    AudienceTabEmployers => "audience-tab-employers",
    AudienceShowMore => "audience-show-more",
    AudienceShowLess => "audience-show-less",
    AudienceApplicantsTitle => "audience-applicants-title",
    AudienceApplicants1Title => "audience-applicants-1-title",
    AudienceApplicants1Body => "audience-applicants-1-body",
    AudienceApplicants2Title => "audience-applicants-2-title",
    AudienceApplicants2Body => "audience-applicants-2-body",
    AudienceApplicants3Title => "audience-applicants-3-title",
    AudienceApplicants3Body => "audience-applicants-3-body",
    AudienceApplicants4Title => "audience-applicants-4-title",
    AudienceApplicants4Body => "audience-applicants-4-body",
    AudienceApplicants5Title => "audience-applicants-5-title",
    AudienceApplicants5Body => "audience-applicants-5-body",
    AudienceApplicants6Title => "audience-applicants-6-title",
    AudienceApplicants6Body => "audience-applicants-6-body",
    AudienceSchoolsTitle => "audience-schools-title",
    AudienceSchools1Title => "audience-schools-1-title",
    AudienceSchools1Body => "audience-schools-1-body",
    AudienceSchools2Title => "audience-schools-2-title",
    AudienceSchools2Body => "audience-schools-2-body",
    AudienceSchools3Title => "audience-schools-3-title",
    AudienceSchools3Body => "audience-schools-3-body",
    AudienceSchools4Title => "audience-schools-4-title",
    AudienceSchools4Body => "audience-schools-4-body",
    AudienceSchools5Title => "audience-schools-5-title",
    AudienceSchools5Body => "audience-schools-5-body",
    AudienceSchools6Title => "audience-schools-6-title",
    AudienceSchools6Body => "audience-schools-6-body",
    AudienceEmployersTitle => "audience-employers-title",
    AudienceEmployers1Title => "audience-employers-1-title",
    AudienceEmployers1Body => "audience-employers-1-body",
    AudienceEmployers2Title => "audience-employers-2-title",
    AudienceEmployers2Body => "audience-employers-2-body",
    AudienceEmployers3Title => "audience-employers-3-title",
    AudienceEmployers3Body => "audience-employers-3-body",
    AudienceEmployers4Title => "audience-employers-4-title",
    AudienceEmployers4Body => "audience-employers-4-body",
    AudienceEmployers5Title => "audience-employers-5-title",
    AudienceEmployers5Body => "audience-employers-5-body",
    AudienceEmployers6Title => "audience-employers-6-title",
    AudienceEmployers6Body => "audience-employers-6-body",

    // How it works
    HowEyebrow => "how-eyebrow",
    HowTitle => "how-title",
    HowSubtitle => "how-subtitle",
    HowStepCounter => "how-step-counter",
    HowDiscoverTitle => "how-discover-title",
    HowDiscoverBody => "how-discover-body",
    HowManageTitle => "how-manage-title",
    HowManageBody => "how-manage-body",
    HowEvaluateTitle => "how-evaluate-title",
    HowEvaluateBody => "how-evaluate-body",

    // Internship types
    TypesTitle => "types-title",
    TypesBody => "types-body",
    TypesNote => "types-note",
    TypesUpperSecondaryLevel => "types-upper-secondary-level",
    TypesUpperSecondaryTerm => "types-upper-secondary-term",
    TypesUpperSecondaryBody => "types-upper-secondary-body",
    TypesAdaptedLevel => "types-adapted-level",
    TypesAdaptedTerm => "types-adapted-term",
    TypesAdaptedBody => "types-adapted-body",
    TypesAdultLevel => "types-adult-level",
    TypesAdultTerm => "types-adult-term",
    TypesAdultBody => "types-adult-body",
    TypesUniversityLevel => "types-university-level",
    TypesUniversityTerm => "types-university-term",
    TypesUniversityBody => "types-university-body",
    TypesInformalLevel => "types-informal-level",
    TypesInformalTerm => "types-informal-term",
    TypesInformalBody => "types-informal-body",

    // Footer
    FooterDescription => "footer-description",
    FooterCompliance => "footer-compliance",
    FooterOrgNumber => "footer-org-number",
    FooterNavigationHeading => "footer-navigation-heading",
    FooterContactHeading => "footer-contact-heading",
    FooterDemo => "footer-demo",
    FooterEmail => "footer-email",
    FooterPhone => "footer-phone",
    FooterLinkedin => "footer-linkedin",
    FooterLanguageHeading => "footer-language-heading",
    FooterThemeToggle => "footer-theme-toggle",
    FooterLegalPrivacy => "footer-legal-privacy",
    FooterLegalTerms => "footer-legal-terms",
    FooterLegalCookies => "footer-legal-cookies",
    FooterCopyright => "footer-copyright",

    // Floating call to action
    FloatingCta => "floating-cta",

    // Demo request page
    DemoTitle => "demo-title",
    DemoSubtitle => "demo-subtitle",
    DemoDetailsHeading => "demo-details-heading",
    DemoFieldName => "demo-field-name",
    DemoFieldEmail => "demo-field-email",
    DemoFieldPhone => "demo-field-phone",
    DemoFieldOrganization => "demo-field-organization",
    DemoFieldRole => "demo-field-role",
    DemoFieldInterest => "demo-field-interest",
    DemoFieldMessage => "demo-field-message",
    DemoPlaceholderName => "demo-placeholder-name",
    DemoPlaceholderEmail => "demo-placeholder-email",
    DemoPlaceholderPhone => "demo-placeholder-phone",
    DemoPlaceholderOrganization => "demo-placeholder-organization",
    DemoPlaceholderRole => "demo-placeholder-role",
    DemoPlaceholderMessage => "demo-placeholder-message",
    DemoInterestStudent => "demo-interest-student",
    DemoInterestEmployer => "demo-interest-employer",
    DemoInterestSchool => "demo-interest-school",
    DemoRequired => "demo-required",
    DemoConsent => "demo-consent",
    DemoSubmit => "demo-submit",
    DemoSubmitting => "demo-submitting",
    DemoSuccessTitle => "demo-success-title",
    DemoSuccessBody => "demo-success-body",
    DemoLearnMore => "demo-learn-more",
    DemoErrorSummary => "demo-error-summary",
    DemoErrorNameRequired => "demo-error-name-required",
    DemoErrorEmailRequired => "demo-error-email-required",
    DemoErrorEmailInvalid => "demo-error-email-invalid",
    DemoErrorOrganizationRequired => "demo-error-organization-required",
    DemoErrorInterestInvalid => "demo-error-interest-invalid",
    DemoErrorConsentRequired => "demo-error-consent-required",
    DemoSubmissionFailed => "demo-submission-failed",

    // What is LIA page
    LiaTitle => "lia-title",
    LiaIntro => "lia-intro",
    LiaStudentsTitle => "lia-students-title",
    LiaStudentsBody => "lia-students-body",
    LiaEmployersTitle => "lia-employers-title",
    LiaEmployersBody => "lia-employers-body",
    LiaSchoolsTitle => "lia-schools-title",
    LiaSchoolsBody => "lia-schools-body",
    LiaCta => "lia-cta",

    // Not found
    NotFoundTitle => "not-found-title",
    NotFoundBody => "not-found-body",
    NotFoundHome => "not-found-home",
}
