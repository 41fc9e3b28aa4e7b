//! Built-in phrasebook, translator dictionary and safety map data

use crate::domain::entities::{
    DictionaryEntry, EmergencyContact, GeoPoint, PhraseCategory, PhrasebookEntry, PointType,
    SafetyPoint,
};

pub fn phrasebook() -> Vec<PhrasebookEntry> {
    use PhraseCategory::*;

    let rows: [(&str, &str, &str, PhraseCategory); 16] = [
        ("Hello", "নমস্কাৰ", "Nomoskar", Greetings),
        ("Thank you", "ধন্যবাদ", "Dhonnobad", Greetings),
        ("Welcome", "স্বাগতম", "Swagotom", Greetings),
        ("How are you?", "আপুনি কেনে আছে?", "Aponi kene ase?", Greetings),
        ("Where is...?", "ক'ত আছে...?", "Kot ase...?", Directions),
        ("Go straight", "সঠিকে যাওক", "Sothike jaok", Directions),
        ("Turn left", "বাওঁফালে ঘূৰক", "Baom fale ghurok", Directions),
        ("Turn right", "সোঁফালে ঘূৰক", "Xom fale ghurok", Directions),
        ("Help!", "সাহায্য কৰক!", "Xahayyo korok!", Emergency),
        ("Call police", "পুলিচক মাতক", "Policek matok", Emergency),
        ("I need a doctor", "মোৰ ডাক্তৰ লাগে", "Mur doktor lage", Emergency),
        ("How much?", "কিমান দাম?", "Kiman dam?", Shopping),
        ("Too expensive", "বহুত দামী", "Bohut dami", Shopping),
        ("Can you reduce?", "কমাব পাৰিবনে?", "Komab paribone?", Shopping),
        ("Delicious", "স্বাদযুক্ত", "Swadyukt", Food),
        ("Water please", "পানী দিয়ক", "Pani diok", Food),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((english, assamese, phonetic, category), id)| PhrasebookEntry {
            id,
            english: english.to_string(),
            assamese: assamese.to_string(),
            phonetic: phonetic.to_string(),
            category,
        })
        .collect()
}

pub fn dictionary() -> Vec<DictionaryEntry> {
    let rows: [(&str, &str, &str, &str); 10] = [
        ("hello", "নমস্কাৰ", "नमस्ते", "হ্যালো"),
        ("thank you", "ধন্যবাদ", "धन्यवाद", "ধন্যবাদ"),
        ("help", "সাহায্য কৰক", "मदद", "সাহায্য"),
        ("water", "পানী", "पानी", "জল"),
        ("food", "খাদ্য", "खाना", "খাবার"),
        ("where is the temple", "মন্দিৰ ক'ত?", "मंदिर कहाँ है?", "মন্দির কোথায়?"),
        ("how much does this cost", "এইটোৰ দাম কিমান?", "इसकी कीमत कितनी है?", "এটার দাম কত?"),
        ("i need a doctor", "মোৰ ডাক্তৰ লাগে", "मुझे डॉक्टर चाहिए", "আমার একজন ডাক্টর প্রয়োজন"),
        ("beautiful", "ধুনীয়া", "सुंदर", "সুন্দর"),
        ("delicious", "স্বাদযুক্ত", "स्वादिष्ट", "সুস্বাদু"),
    ];

    rows.into_iter()
        .map(|(english, assamese, hindi, bengali)| DictionaryEntry {
            english: english.to_string(),
            assamese: assamese.to_string(),
            hindi: hindi.to_string(),
            bengali: bengali.to_string(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn point(
    id: u32,
    name: &str,
    point_type: PointType,
    safety_score: u8,
    address: &str,
    (lat, lng): (f64, f64),
    description: &str,
    features: [&str; 4],
    (contact, hours, rating): (&str, &str, f32),
) -> SafetyPoint {
    SafetyPoint {
        id,
        name: name.to_string(),
        point_type,
        safety_score,
        address: address.to_string(),
        location: GeoPoint { lat, lng },
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        contact: contact.to_string(),
        hours: hours.to_string(),
        rating,
    }
}

pub fn safety_points() -> Vec<SafetyPoint> {
    vec![
        point(
            1,
            "Kamakhya Temple Main Gate",
            PointType::Temple,
            9,
            "Kamakhya Temple Main Gate, Nilachal Hill, Guwahati",
            (26.1665, 91.7065),
            "Main entrance of the Kamakhya Temple, well-lit and crowded area with security presence.",
            ["24/7 Security", "Police Booth", "Public Transport", "Well-lit"],
            ("0361-2547100", "5:00 AM - 10:00 PM", 4.8),
        ),
        point(
            2,
            "Kachari Ghat",
            PointType::Riverfront,
            8,
            "Brahmaputra Riverfront near Kachari Ghat, Guwahati",
            (26.1839, 91.7464),
            "Popular riverfront location with police patrol and tourist assistance center.",
            ["Tourist Police", "CCTV", "First Aid", "Public Toilets"],
            ("0361-2547200", "6:00 AM - 8:00 PM", 4.6),
        ),
        point(
            3,
            "Dighalipukhuri Park Entrance",
            PointType::Park,
            7,
            "Dighalipukhuri Park Entrance, Guwahati",
            (26.1864, 91.7432),
            "Main park entrance with security guards and well-maintained public area.",
            ["Security Guards", "Public Lighting", "Near Police Station", "Medical Help"],
            ("0361-2547300", "6:00 AM - 9:00 PM", 4.5),
        ),
        point(
            4,
            "Pan Bazaar Police Station",
            PointType::Police,
            10,
            "Pan Bazaar Police Station, GS Road, Guwahati",
            (26.1870, 91.7440),
            "24/7 police station with tourist assistance desk and emergency services.",
            ["24/7 Police", "Emergency Services", "Tourist Help Desk", "Secure Parking"],
            ("100", "24/7", 4.9),
        ),
        point(
            5,
            "Guwahati Railway Station",
            PointType::Transport,
            8,
            "Guwahati Railway Station, Paltan Bazaar",
            (26.1852, 91.7511),
            "Main railway station with GRP police, CCTV surveillance, and tourist help desk.",
            ["GRP Police", "CCTV", "Tourist Counter", "Medical Room"],
            ("0361-2547131", "24/7", 4.4),
        ),
    ]
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    [
        ("Police Control Room", "100"),
        ("Ambulance", "102"),
        ("Fire Station", "101"),
        ("Tourist Police", "0361-2547100"),
        ("GMCH Emergency", "0361-2529442"),
    ]
    .into_iter()
    .map(|(name, phone)| EmergencyContact {
        name: name.to_string(),
        phone: phone.to_string(),
    })
    .collect()
}
