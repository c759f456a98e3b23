//! Display text for every supported locale.
//!
//! Lookups resolve through a fixed chain: the active locale, then English,
//! then the raw key. English is complete by construction, so the last step
//! only matters for free-form keys such as scenario themes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Te,
    Hi,
    Ur,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Te, Locale::Hi, Locale::Ur];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Te => "te",
            Locale::Hi => "hi",
            Locale::Ur => "ur",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Te => "తెలుగు",
            Locale::Hi => "हिंदी",
            Locale::Ur => "اردو",
        }
    }

    /// Next locale in selector order, wrapping around.
    pub fn next(self) -> Self {
        let index = Locale::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Locale::ALL[(index + 1) % Locale::ALL.len()]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unsupported locale '{s}'"))
    }
}

macro_rules! texts {
    ($($variant:ident => $key:literal, $english:literal;)*) => {
        /// Every piece of interface text, keyed by what it says.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Text {
            $($variant,)*
        }

        impl Text {
            pub const ALL: &'static [Text] = &[$(Text::$variant,)*];

            /// Stable string key, e.g. `"noQuestionsAvailable"`.
            pub fn key(self) -> &'static str {
                match self {
                    $(Text::$variant => $key,)*
                }
            }

            fn english(self) -> &'static str {
                match self {
                    $(Text::$variant => $english,)*
                }
            }
        }
    };
}

texts! {
    Back => "back", "Back";
    Next => "next", "Next";
    Previous => "previous", "Previous";
    Loading => "loading", "Loading...";
    Submit => "submit", "Submit";
    Language => "language", "Language";
    SignedInAs => "signedInAs", "Signed in as";

    CompleteProfile => "completeProfile", "Complete Your Profile";
    ProfileIntro => "profileIntro", "We need a few details to personalize your experience";
    Name => "name", "Name";
    Phone => "phone", "Phone Number";
    Age => "age", "Age";
    State => "state", "State";
    District => "district", "District";
    ProfileUpdated => "profileUpdated", "Profile updated successfully!";

    CyrexAssessment => "cyrexAssessment", "Cyrex Assessment";
    CybersecurityAssessmentPlatform => "cybersecurityAssessmentPlatform", "Cybersecurity Assessment Platform";
    ChooseYourAgeGroup => "chooseYourAgeGroup", "Choose Your Age Group";
    SelectAgeGroupToStart => "selectAgeGroupToStart", "Select your age group to begin the cybersecurity awareness assessment";
    Years => "years", "Years";
    Teenagers => "teenagers", "Teenagers";
    YoungAdults => "youngAdults", "Young Adults";
    Adults => "adults", "Adults";
    Seniors => "seniors", "Seniors";
    StartAssessment => "startAssessment", "Start Assessment";
    AssessmentIncludes => "assessmentIncludes", "Assessment includes";
    LoadingAssessment => "loadingAssessment", "Loading assessment...";
    NoQuestionsAvailable => "noQuestionsAvailable", "No questions available for this age group.";
    Scenario => "scenario", "Scenario";
    WhatWouldYouDo => "whatWouldYouDo", "What would you do?";
    Submitting => "submitting", "Submitting...";
    NextQuestion => "nextQuestion", "Next Question";
    CompleteAssessment => "completeAssessment", "Complete Assessment";

    AssessmentComplete => "assessmentComplete", "Assessment Complete";
    CompletedOn => "completedOn", "Completed on";
    LowRiskExcellent => "lowRiskExcellent", "Low Risk - Excellent Security Awareness!";
    MediumRiskGood => "mediumRiskGood", "Medium Risk - Good Foundation";
    HighRiskImprovement => "highRiskImprovement", "High Risk - Improvement Needed";
    CriticalRiskImmediate => "criticalRiskImmediate", "Critical Risk - Immediate Action Required";
    LowRiskDescription => "lowRiskDescription", "You demonstrate strong cybersecurity awareness and are well-equipped to identify and avoid common scams.";
    MediumRiskDescription => "mediumRiskDescription", "You have a solid understanding of cybersecurity but could benefit from additional awareness in certain areas.";
    HighRiskDescription => "highRiskDescription", "You may be vulnerable to certain types of cyber attacks. Consider additional cybersecurity training.";
    CriticalRiskDescription => "criticalRiskDescription", "You are at high risk of falling victim to cyber crimes. Immediate cybersecurity education is strongly recommended.";
    CorrectAnswers => "correctAnswers", "Correct Answers";
    TotalQuestions => "totalQuestions", "Total Questions";
    RiskLevel => "riskLevel", "Risk Level";
    Recommendations => "recommendations", "Recommendations";
    TakeAnotherAssessment => "takeAnotherAssessment", "Take Another Assessment";
    ScamBreakdown => "scamBreakdown", "Scam Breakdown";

    LowRisk => "lowRisk", "Low Risk";
    MediumRisk => "mediumRisk", "Medium Risk";
    HighRisk => "highRisk", "High Risk";
    CriticalRisk => "criticalRisk", "Critical Risk";

    ScoreOutstanding => "scoreOutstanding", "Outstanding! You're a cybersecurity expert!";
    ScoreExcellent => "scoreExcellent", "Excellent cybersecurity awareness!";
    ScoreGood => "scoreGood", "Good security knowledge with room for improvement.";
    ScoreFair => "scoreFair", "Fair understanding, but additional training recommended.";
    ScoreBasic => "scoreBasic", "Basic awareness present, significant improvement needed.";
    ScoreUrgent => "scoreUrgent", "Urgent cybersecurity training required.";

    RecommendCourse => "recommendCourse", "Consider taking a comprehensive cybersecurity awareness course immediately.";
    RecommendCaution => "recommendCaution", "Be extra cautious when receiving unsolicited calls, messages, or emails.";
    RecommendReviewPatterns => "recommendReviewPatterns", "Review common scam patterns and practice identifying red flags.";
    RecommendVerifyRequests => "recommendVerifyRequests", "Always verify requests for personal information through official channels.";
    RecommendStayCurrent => "recommendStayCurrent", "Keep up with the latest cybersecurity trends and threats.";
    RecommendShareKnowledge => "recommendShareKnowledge", "Share your knowledge with friends and family to help them stay safe online.";

    AssessmentHistory => "assessmentHistory", "Assessment History";
    ViewHistory => "viewHistory", "View History";
    NoAssessmentsYet => "noAssessmentsYet", "No assessments completed yet";
    Score => "score", "Score";

    FetchFailed => "fetchFailed", "Could not load the assessment. Please try again later.";
    HistoryFailed => "historyFailed", "Could not load your assessment history.";
    SaveFailed => "saveFailed", "Could not save your results. Your answers have been kept.";
    ProfileSaveFailed => "profileSaveFailed", "Could not save your profile.";

    HintAgeSelection => "hintAgeSelection", "j/k move  ·  enter start  ·  h history  ·  l language  ·  q quit";
    HintQuiz => "hintQuiz", "j/k or 1-9 choose  ·  enter next  ·  p previous  ·  esc leave  ·  q quit";
    HintSaveFailed => "hintSaveFailed", "r retry  ·  esc discard";
    HintResults => "hintResults", "j/k scroll  ·  enter take another  ·  h history  ·  q quit";
    HintHistory => "hintHistory", "j/k scroll  ·  esc back  ·  q quit";
    HintProfile => "hintProfile", "tab next field  ·  enter save  ·  esc quit";
    HintBack => "hintBack", "esc back  ·  q quit";
}

impl FromStr for Text {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Text::ALL.iter().copied().find(|t| t.key() == s).ok_or(())
    }
}

/// Text for `key` in `locale`, falling back to English.
pub fn tr(locale: Locale, key: Text) -> &'static str {
    localized(locale, key).unwrap_or_else(|| key.english())
}

/// Display name of a scenario theme, e.g. `"Courier Scam"`.
///
/// Themes are looked up by their normalized key (lowercase ASCII letters and
/// digits only). Unknown themes are shown as given.
pub fn theme_name<'a>(locale: Locale, theme: &'a str) -> Cow<'a, str> {
    let key = theme_key(theme);
    match theme_text(locale, &key).or_else(|| theme_text(Locale::En, &key)) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Borrowed(theme),
    }
}

/// String-keyed lookup for callers that only have a key name.
pub fn translate<'a>(locale: Locale, key: &'a str) -> Cow<'a, str> {
    match key.parse::<Text>() {
        Ok(text) => Cow::Borrowed(tr(locale, text)),
        Err(()) => theme_name(locale, key),
    }
}

pub fn theme_key(theme: &str) -> String {
    theme
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn localized(locale: Locale, key: Text) -> Option<&'static str> {
    match locale {
        Locale::En => Some(key.english()),
        Locale::Te => telugu(key),
        Locale::Hi => hindi(key),
        Locale::Ur => urdu(key),
    }
}

fn telugu(key: Text) -> Option<&'static str> {
    use Text::*;
    let text = match key {
        Back => "వెనుకకు",
        Next => "తరువాత",
        Previous => "మునుపటి",
        Loading => "లోడ్ అవుతోంది...",
        Submit => "సమర్పించు",
        CompleteProfile => "మీ ప్రొఫైల్ పూర్తి చేయండి",
        Name => "పేరు",
        Phone => "ఫోన్ నంబర్",
        Age => "వయస్సు",
        State => "రాష్ట్రం",
        District => "జిల్లా",
        ProfileUpdated => "ప్రొఫైల్ విజయవంతంగా నవీకరించబడింది!",
        CyrexAssessment => "సైరెక్స్ అంచనా",
        CybersecurityAssessmentPlatform => "సైబర్ సెక్యూరిటీ అంచనా వేదిక",
        ChooseYourAgeGroup => "మీ వయో వర్గాన్ని ఎంచుకోండి",
        SelectAgeGroupToStart => {
            "సైబర్ సెక్యూరిటీ అవగాహన అంచనా ప్రారంభించడానికి మీ వయో వర్గాన్ని ఎంచుకోండి"
        }
        Years => "సంవత్సరాలు",
        Teenagers => "యువకులు",
        YoungAdults => "యువ వయస్కులు",
        Adults => "వయస్కులు",
        Seniors => "పెద్దలు",
        StartAssessment => "అంచనా ప్రారంభించండి",
        LoadingAssessment => "అంచనా లోడ్ అవుతోంది...",
        NoQuestionsAvailable => "ఈ వయో వర్గానికి ప్రశ్నలు అందుబాటులో లేవు.",
        Scenario => "దృశ్యం",
        WhatWouldYouDo => "మీరు ఏమి చేస్తారు?",
        Submitting => "సమర్పిస్తోంది...",
        AssessmentComplete => "అంచనా పూర్తయింది",
        CompletedOn => "పూర్తయిన తేదీ",
        LowRiskExcellent => "తక్కువ ప్రమాదం - అద్భుతమైన భద్రతా అవగాహన!",
        MediumRiskGood => "మధ్యస్థ ప్రమాదం - మంచి పునాది",
        HighRiskImprovement => "అధిక ప్రమాదం - మెరుగుదల అవసరం",
        CriticalRiskImmediate => "క్లిష్ట ప్రమాదం - తక్షణ చర్య అవసరం",
        LowRiskDescription => {
            "మీరు బలమైన సైబర్ సెక్యూరిటీ అవగాహనను ప్రదర్శిస్తున్నారు మరియు సాధారణ మోసాలను గుర్తించి నివారించడానికి బాగా సిద్ధమైనారు."
        }
        MediumRiskDescription => {
            "మీకు సైబర్ సెక్యూరిటీ గురించి మంచి అవగాహన ఉంది కానీ కొన్ని రంగాలలో అదనపు అవగాహన నుండి ప్రయోజనం పొందవచ్చు."
        }
        HighRiskDescription => {
            "మీరు కొన్ని రకాల సైబర్ దాడులకు హాని కలిగించవచ్చు. అదనపు సైబర్ సెక్యూరిటీ శిక్షణను పరిగణించండి."
        }
        CriticalRiskDescription => {
            "మీరు సైబర్ నేరాలకు బాధితులు కావడానికి అధిక ప్రమాదంలో ఉన్నారు. తక్షణ సైబర్ సెక్యూరిటీ విద్య బలంగా సిఫార్సు చేయబడింది."
        }
        CorrectAnswers => "సరైన సమాధానాలు",
        TotalQuestions => "మొత్తం ప్రశ్నలు",
        RiskLevel => "ప్రమాద స్థాయి",
        Recommendations => "సిఫార్సులు",
        TakeAnotherAssessment => "మరొక అంచనా తీసుకోండి",
        AssessmentHistory => "అంచనా చరిత్ర",
        ViewHistory => "చరిత్రను చూడండి",
        NoAssessmentsYet => "ఇంకా అంచనలు పూర్తి కాలేదు",
        Score => "స్కోర్",
        _ => return None,
    };
    Some(text)
}

fn hindi(key: Text) -> Option<&'static str> {
    use Text::*;
    let text = match key {
        Back => "वापस",
        Next => "आगे",
        Previous => "पिछला",
        Loading => "लोड हो रहा है...",
        Submit => "जमा करें",
        CompleteProfile => "अपनी प्रोफ़ाइल पूरी करें",
        Name => "नाम",
        Phone => "फ़ोन नंबर",
        Age => "उम्र",
        State => "राज्य",
        District => "जिला",
        ProfileUpdated => "प्रोफ़ाइल सफलतापूर्वक अपडेट हुई!",
        CyrexAssessment => "साइरेक्स मूल्यांकन",
        CybersecurityAssessmentPlatform => "साइबर सुरक्षा मूल्यांकन प्लेटफॉर्म",
        ChooseYourAgeGroup => "अपना आयु समूह चुनें",
        SelectAgeGroupToStart => {
            "साइबर सुरक्षा जागरूकता मूल्यांकन शुरू करने के लिए अपना आयु समूह चुनें"
        }
        Years => "वर्ष",
        Teenagers => "किशोर",
        YoungAdults => "युवा वयस्क",
        Adults => "वयस्क",
        Seniors => "वरिष्ठ",
        StartAssessment => "मूल्यांकन शुरू करें",
        LoadingAssessment => "मूल्यांकन लोड हो रहा है...",
        NoQuestionsAvailable => "इस आयु समूह के लिए कोई प्रश्न उपलब्ध नहीं है।",
        Scenario => "परिदृश्य",
        WhatWouldYouDo => "आप क्या करेंगे?",
        Submitting => "जमा कर रहे हैं...",
        AssessmentComplete => "मूल्यांकन पूर्ण",
        CompletedOn => "पूर्ण किया गया",
        LowRiskExcellent => "कम जोखिम - उत्कृष्ट सुरक्षा जागरूकता!",
        MediumRiskGood => "मध्यम जोखिम - अच्छी नींव",
        HighRiskImprovement => "उच्च जोखिम - सुधार की आवश्यकता",
        CriticalRiskImmediate => "गंभीर जोखिम - तत्काल कार्रवाई आवश्यक",
        LowRiskDescription => {
            "आप मजबूत साइबर सुरक्षा जागरूकता प्रदर्शित करते हैं और सामान्य घोटालों की पहचान और बचाव के लिए अच्छी तरह से तैयार हैं।"
        }
        MediumRiskDescription => {
            "आपके पास साइबर सुरक्षा की ठोस समझ है लेकिन कुछ क्षेत्रों में अतिरिक्त जागरूकता से लाभ हो सकता है।"
        }
        HighRiskDescription => {
            "आप कुछ प्रकार के साइबर हमलों के लिए असुरक्षित हो सकते हैं। अतिरिक्त साइबर सुरक्षा प्रशिक्षण पर विचार करें।"
        }
        CriticalRiskDescription => {
            "आप साइबर अपराधों के शिकार होने के उच्च जोखिम में हैं। तत्काल साइबर सुरक्षा शिक्षा की दृढ़ता से सिफारिश की जाती है।"
        }
        CorrectAnswers => "सही उत्तर",
        TotalQuestions => "कुल प्रश्न",
        RiskLevel => "जोखिम स्तर",
        Recommendations => "सिफारिशें",
        TakeAnotherAssessment => "दूसरा मूल्यांकन लें",
        AssessmentHistory => "मूल्यांकन इतिहास",
        ViewHistory => "इतिहास देखें",
        NoAssessmentsYet => "अभी तक कोई मूल्यांकन पूरा नहीं हुआ",
        Score => "स्कोर",
        _ => return None,
    };
    Some(text)
}

fn urdu(key: Text) -> Option<&'static str> {
    use Text::*;
    let text = match key {
        Back => "واپس",
        Next => "اگلا",
        Previous => "پچھلا",
        Loading => "لوڈ ہو رہا ہے...",
        Submit => "جمع کریں",
        CompleteProfile => "اپنا پروفائل مکمل کریں",
        Name => "نام",
        Phone => "فون نمبر",
        Age => "عمر",
        State => "ریاست",
        District => "ضلع",
        ProfileUpdated => "پروفائل کامیابی سے اپ ڈیٹ ہوا!",
        CyrexAssessment => "سائریکس تشخیص",
        CybersecurityAssessmentPlatform => "سائبر سیکیورٹی تشخیص پلیٹ فارم",
        ChooseYourAgeGroup => "اپنا عمری گروپ منتخب کریں",
        SelectAgeGroupToStart => {
            "سائبر سیکیورٹی بیداری کی تشخیص شروع کرنے کے لیے اپنا عمری گروپ منتخب کریں"
        }
        Years => "سال",
        Teenagers => "نوجوان",
        YoungAdults => "نوجوان بالغ",
        Adults => "بالغ",
        Seniors => "بزرگ",
        StartAssessment => "تشخیص شروع کریں",
        LoadingAssessment => "تشخیص لوڈ ہو رہی ہے...",
        NoQuestionsAvailable => "اس عمری گروپ کے لیے کوئی سوالات دستیاب نہیں۔",
        Scenario => "منظر نامہ",
        WhatWouldYouDo => "آپ کیا کریں گے؟",
        Submitting => "جمع کر رہے ہیں...",
        AssessmentComplete => "تشخیص مکمل",
        CompletedOn => "مکمل ہوا",
        LowRiskExcellent => "کم خطرہ - بہترین سیکیورٹی آگاہی!",
        MediumRiskGood => "درمیانی خطرہ - اچھی بنیاد",
        HighRiskImprovement => "زیادہ خطرہ - بہتری کی ضرورت",
        CriticalRiskImmediate => "تشویشناک خطرہ - فوری اقدام ضروری",
        LowRiskDescription => {
            "آپ مضبوط سائبر سیکیورٹی آگاہی کا مظاہرہ کرتے ہیں اور عام فراڈ کی شناخت اور بچاؤ کے لیے اچھی طرح تیار ہیں۔"
        }
        MediumRiskDescription => {
            "آپ کے پاس سائبر سیکیورٹی کی ٹھوس سمجھ ہے لیکن کچھ علاقوں میں اضافی آگاہی سے فائدہ ہو سکتا ہے۔"
        }
        HighRiskDescription => {
            "آپ کچھ قسم کے سائبر حملوں کے لیے کمزور ہو سکتے ہیں۔ اضافی سائبر سیکیورٹی تربیت پر غور کریں۔"
        }
        CriticalRiskDescription => {
            "آپ سائبر جرائم کا شکار ہونے کے زیادہ خطرے میں ہیں۔ فوری سائبر سیکیورٹی تعلیم کی سختی سے سفارش کی جاتی ہے۔"
        }
        CorrectAnswers => "صحیح جوابات",
        TotalQuestions => "کل سوالات",
        RiskLevel => "خطرے کی سطح",
        Recommendations => "سفارشات",
        TakeAnotherAssessment => "دوسری تشخیص کریں",
        AssessmentHistory => "تشخیص کی تاریخ",
        ViewHistory => "تاریخ دیکھیں",
        NoAssessmentsYet => "ابھی تک کوئی تشخیص مکمل نہیں ہوئی",
        Score => "سکور",
        _ => return None,
    };
    Some(text)
}

fn theme_text(locale: Locale, key: &str) -> Option<&'static str> {
    let text = match (locale, key) {
        (Locale::En, "fakeinfluencergiveawaytrap") => "Fake Influencer Giveaway Trap",
        (Locale::En, "romancescam") => "Romance Scam",
        (Locale::En, "scamjoboffers") => "Scam Job Offers",
        (Locale::En, "cheapfashionaccessoryscam") => "Cheap Fashion & Accessory Scam",
        (Locale::En, "fakejobinternshipoffer") => "Fake Job/Internship Offer",
        (Locale::En, "courierscam") => "Courier Scam",
        (Locale::En, "marketplacescam") => "Marketplace Scam",
        (Locale::En, "fakeelectricitybill") => "Fake Electricity Bill",
        (Locale::En, "bankingmissedcall") => "Banking Missed Call",
        (Locale::En, "fakemedicinehealthscheme") => "Fake Medicine/Health Scheme",
        (Locale::En, "aadhaarscam") => "Aadhaar Scam",

        (Locale::Te, "fakeinfluencergiveawaytrap") => "నకిలీ ప్రభావకుల బహుమతి ట్రాప్",
        (Locale::Te, "romancescam") => "రొమాన్స్ మోసం",
        (Locale::Te, "scamjoboffers") => "మోసపూరిత ఉద్యోగ ఆఫర్లు",
        (Locale::Te, "cheapfashionaccessoryscam") => "చౌక ఫ్యాషన్ & యాక్సెసరీ మోసం",
        (Locale::Te, "fakejobinternshipoffer") => "నకిలీ ఉద్యోగం/ఇంటర్న్‌షిప్ ఆఫర్",
        (Locale::Te, "courierscam") => "కొరియర్ మోసం",
        (Locale::Te, "marketplacescam") => "మార్కెట్‌ప్లేస్ మోసం",
        (Locale::Te, "fakeelectricitybill") => "నకిలీ విద్యుత్ బిల్లు",
        (Locale::Te, "bankingmissedcall") => "బ్యాంకింగ్ మిస్డ్ కాల్",
        (Locale::Te, "fakemedicinehealthscheme") => "నకిలీ మందు/ఆరోగ్య పథకం",
        (Locale::Te, "aadhaarscam") => "ఆధార్ మోసం",

        (Locale::Hi, "fakeinfluencergiveawaytrap") => "नकली इन्फ्लुएंसर गिवअवे ट्रैप",
        (Locale::Hi, "romancescam") => "रोमांस घोटाला",
        (Locale::Hi, "scamjoboffers") => "घोटाला नौकरी ऑफर",
        (Locale::Hi, "cheapfashionaccessoryscam") => "सस्ते फैशन और एक्सेसरी घोटाला",
        (Locale::Hi, "fakejobinternshipoffer") => "नकली नौकरी/इंटर्नशिप ऑफर",
        (Locale::Hi, "courierscam") => "कूरियर घोटाला",
        (Locale::Hi, "marketplacescam") => "मार्केटप्लेस घोटाला",
        (Locale::Hi, "fakeelectricitybill") => "नकली बिजली बिल",
        (Locale::Hi, "bankingmissedcall") => "बैंकिंग मिस्ड कॉल",
        (Locale::Hi, "fakemedicinehealthscheme") => "नकली दवा/स्वास्थ्य योजना",
        (Locale::Hi, "aadhaarscam") => "आधार घोटाला",

        (Locale::Ur, "fakeinfluencergiveawaytrap") => "جعلی انفلوینسر گیو اوے ٹریپ",
        (Locale::Ur, "romancescam") => "رومانس اسکام",
        (Locale::Ur, "scamjoboffers") => "اسکام نوکری کی پیشکش",
        (Locale::Ur, "cheapfashionaccessoryscam") => "سستے فیشن اور ایکسیسری کا اسکام",
        (Locale::Ur, "fakejobinternshipoffer") => "جعلی نوکری/انٹرن شپ پیشکش",
        (Locale::Ur, "courierscam") => "کورئیر اسکام",
        (Locale::Ur, "marketplacescam") => "مارکیٹ پلیس اسکام",
        (Locale::Ur, "fakeelectricitybill") => "جعلی بجلی کا بل",
        (Locale::Ur, "bankingmissedcall") => "بینکنگ مسڈ کال",
        (Locale::Ur, "fakemedicinehealthscheme") => "جعلی دوا/صحت کی اسکیم",
        (Locale::Ur, "aadhaarscam") => "آدھار اسکام",

        _ => return None,
    };
    Some(text)
}
