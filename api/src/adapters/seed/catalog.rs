//! Built-in Guwahati catalog

use crate::domain::entities::{
    Category, Contact, DurationBucket, Experience, ExperienceId, GeoPoint, Phrase, Price, Vendor,
    VendorId,
};

#[allow(clippy::too_many_arguments)]
fn vendor(
    id: &str,
    name: &str,
    role: &str,
    location: &str,
    bio: &str,
    rating: f32,
    reviews: u32,
    phone: &str,
    email: &str,
) -> Vendor {
    Vendor {
        id: VendorId::from(id),
        name: name.to_string(),
        bio: bio.to_string(),
        role: role.to_string(),
        verified: true,
        location: location.to_string(),
        rating,
        reviews,
        contact: Contact {
            phone: phone.to_string(),
            email: email.to_string(),
        },
    }
}

#[rustfmt::skip]
pub fn guwahati_vendors() -> Vec<Vendor> {
    vec![
        vendor("v1", "Biren", "Master Weaver", "Sualkuchi, Assam",
            "3rd Gen Weaver from Sualkuchi, passionate about preserving the golden thread of Assam.",
            4.8, 124, "+91 98765 43210", "biren.weaver@example.com"),
        vendor("v2", "Brahmaputra Tours", "Tour Operator", "Guwahati, Riverfront",
            "Premier river cruise operator offering sustainable eco-tours.",
            4.9, 89, "+91 88776 65544", "info@brahmaputratours.com"),
        vendor("v3", "Silpukhuri Tea Collective", "Tea Estate", "Silpukhuri",
            "A collective of small tea growers bringing the finest flush to your cup.",
            4.7, 210, "+91 77665 54433", "connect@silpukhuritea.com"),
        vendor("v4", "Kamakhya Guides", "Heritage Guides", "Kamakhya Temple",
            "Official guides of the Kamakhya temple complex with deep historical knowledge.",
            4.6, 340, "+91 66554 43322", "tours@kamakhya.com"),
        vendor("v5", "Roopak's Kitchen", "Culinary Expert", "Ganeshguri",
            "Authentic Assamese culinary expert specializing in traditional thalis.",
            4.9, 45, "+91 55443 32211", "roopak@authenticassam.com"),
        vendor("v6", "Deepor Beel Eco-Tours", "Nature Guides", "Deepor Beel",
            "Dedicated to conserving the Ramsar site through responsible tourism.",
            4.7, 112, "+91 44332 21100", "eco@deeporbeel.org"),
    ]
}

fn phrases(rows: &[(&str, &str, &str)]) -> Vec<Phrase> {
    rows.iter()
        .map(|(original, translated, pronunciation)| Phrase {
            original: original.to_string(),
            translated: translated.to_string(),
            pronunciation: pronunciation.to_string(),
        })
        .collect()
}

/// Phrases shared by most listings
fn common_phrases() -> Vec<Phrase> {
    phrases(&[
        ("Bhal lagil", "It was good", "bhal la-gil"),
        ("Ki daam?", "How much?", "kee daam"),
        ("Dhonyobaad", "Thank you", "dhon-yo-baad"),
        ("Namaskar", "Hello", "nam-as-kar"),
        ("Rasta kot?", "Where is the way?", "ras-ta kot"),
        ("Moi Photo tulibo parune?", "Can I take a photo?", "moi photo..."),
    ])
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct Listing<'a> {
    id: &'a str,
    title: &'a str,
    vendor: &'a str,
    category: Category,
    duration: DurationBucket,
    price: u32,
    description: &'a str,
    at: (f64, f64),
    languages: &'a [&'a str],
    highlights: &'a [&'a str],
}

impl Listing<'_> {
    fn with_phrases(self, phrases: Vec<Phrase>) -> Experience {
        Experience {
            id: ExperienceId::from(self.id),
            title: self.title.to_string(),
            vendor_id: VendorId::from(self.vendor),
            category: self.category,
            duration: self.duration,
            price: Price::inr(self.price),
            description: self.description.to_string(),
            location: GeoPoint {
                lat: self.at.0,
                lng: self.at.1,
            },
            languages: strings(self.languages),
            phrases,
            highlights: strings(self.highlights),
        }
    }
}

pub fn guwahati_experiences() -> Vec<Experience> {
    use Category::*;
    use DurationBucket::*;

    vec![
        Listing {
            id: "e1",
            title: "Sualkuchi Weaving Demo",
            vendor: "v1",
            category: Craft,
            duration: QuickBite,
            price: 350,
            description: "Watch the magic of Muga silk weaving in real-time. Learn the basics of the loom.",
            at: (26.17, 91.57),
            languages: &["Assamese", "English", "Hindi"],
            highlights: &[
                "Witness the intricate art of Muga silk weaving",
                "Interact with master weavers in their homes",
                "Try your hand at the traditional loom",
            ],
        }
        .with_phrases(common_phrases()),
        Listing {
            id: "e2",
            title: "Kamakhya Sunset Trail",
            vendor: "v4",
            category: Heritage,
            duration: DeepDive,
            price: 500,
            description: "A spiritual walk around the Nilachal hill during sunset, exploring hidden shrines.",
            at: (26.16, 91.70),
            languages: &["Assamese", "Hindi"],
            highlights: &[
                "Guided sunset walk around Nilachal Hill",
                "Visit hidden ancient shrines",
                "Panoramic views of Guwahati city",
            ],
        }
        .with_phrases(common_phrases()),
        Listing {
            id: "e3",
            title: "Umananda Island Quick Ferry",
            vendor: "v2",
            category: Riverfront,
            duration: DeepDive,
            price: 150,
            description: "Ferry ride to the smallest river island. Spot Gangetic dolphins if lucky.",
            at: (26.19, 91.74),
            languages: &["Assamese", "English"],
            highlights: &[
                "Scenic ferry ride across the Brahmaputra",
                "Explore the smallest inhabited river island",
                "Chance to spot Golden Langurs",
            ],
        }
        .with_phrases(common_phrases()),
        Listing {
            id: "e4",
            title: "Tea Tasting Masterclass",
            vendor: "v3",
            category: Tea,
            duration: QuickBite,
            price: 400,
            description: "Taste 5 distinct varieties of Assam tea with a master blender.",
            at: (26.18, 91.76),
            languages: &["English"],
            highlights: &[
                "Taste 5 premium Assam tea varieties",
                "Learn the art of tea tasting from a master",
                "Understand the journey from leaf to cup",
            ],
        }
        .with_phrases(common_phrases()),
        Listing {
            id: "e5",
            title: "Pottery Workshop",
            vendor: "v1",
            category: Craft,
            duration: HalfDay,
            price: 1200,
            description: "Hands-on pottery session using traditional wheel and clay.",
            at: (26.15, 91.60),
            languages: &["Assamese"],
            highlights: &[
                "Hands-on experience with the potter's wheel",
                "Create your own clay artifact",
                "Learn about traditional Assamese pottery",
            ],
        }
        .with_phrases(common_phrases()),
        Listing {
            id: "e6",
            title: "Brahmaputra Dinner Cruise",
            vendor: "v2",
            category: Riverfront,
            duration: HalfDay,
            price: 2500,
            description: "Luxury dinner cruise with live folk music and buffet.",
            at: (26.18, 91.73),
            languages: &["English", "Hindi"],
            highlights: &[
                "Cruising on the majestic Brahmaputra",
                "Enjoy live folk music and dance",
                "Delicious buffet dinner with local cuisine",
            ],
        }
        .with_phrases(Vec::new()),
        Listing {
            id: "e7",
            title: "Assamese Thali Tasting",
            vendor: "v5",
            category: Heritage,
            duration: DeepDive,
            price: 600,
            description: "Savor a traditional 15-item Assamese thali including khar, tenga, and aloo pitika.",
            at: (26.14, 91.78),
            languages: &["Assamese", "Hindi", "English"],
            highlights: &[
                "Taste 15+ authentic Assamese dishes",
                "Learn about indigenous ingredients",
                "Experience traditional dining etiquette",
            ],
        }
        .with_phrases(phrases(&[("Bohut swad", "Very tasty", "bo-hut swad")])),
        Listing {
            id: "e8",
            title: "Bird Watching at Deepor Beel",
            vendor: "v6",
            category: Riverfront,
            duration: HalfDay,
            price: 800,
            description: "Early morning boat ride to spot migratory birds in the permanent freshwater lake.",
            at: (26.11, 91.65),
            languages: &["Assamese", "English"],
            highlights: &[
                "Boat ride in a permanent freshwater lake",
                "Spot rare migratory birds",
                "Learn about the wetland ecosystem",
            ],
        }
        .with_phrases(phrases(&[
            ("Namaskar", "Hello", "nam-as-kar"),
            ("Charai", "Bird", "sa-rai"),
            ("Dhonyobaad", "Thank you", "dhon-yo-baad"),
        ])),
        Listing {
            id: "e9",
            title: "Silk Worm Lifecycle Demo",
            vendor: "v1",
            category: Craft,
            duration: QuickBite,
            price: 200,
            description: "Learn about the lifecycle of the Muga silkworm and how the golden silk is extracted.",
            at: (26.17, 91.57),
            languages: &["Assamese", "Hindi"],
            highlights: &[
                "Observe the complete lifecycle of Muga silkworm",
                "See the extraction of golden silk thread",
                "Visit a rearing farm",
            ],
        }
        .with_phrases(phrases(&[
            ("Pat", "Silk", "pat"),
            ("Muga", "Golden Silk", "mu-ga"),
        ])),
        Listing {
            id: "e11",
            title: "Navagraha Temple Visit",
            vendor: "v4",
            category: Heritage,
            duration: QuickBite,
            price: 100,
            description: "Visit the temple of the nine planets on Chitrachal Hill.",
            at: (26.18, 91.77),
            languages: &["Assamese", "Hindi"],
            highlights: &[
                "Explore the ancient Navagraha Temple",
                "Learn about Vedic astrology and history",
                "Enjoy views from Chitrachal Hill",
            ],
        }
        .with_phrases(phrases(&[
            ("Puja", "Worship", "pu-ja"),
            ("Graha", "Planet", "gra-ha"),
        ])),
        Listing {
            id: "e12",
            title: "Sunset River Photography",
            vendor: "v2",
            category: Riverfront,
            duration: DeepDive,
            price: 450,
            description: "Guided photography session capturing the golden hour over the Brahmaputra.",
            at: (26.19, 91.73),
            languages: &["English"],
            highlights: &[
                "Capture the perfect sunset shot",
                "Learn composition and lighting techniques",
                "Explore riverfront locations",
            ],
        }
        .with_phrases(phrases(&[("Nodi", "River", "no-di"), ("Beli", "Sun", "be-li")])),
    ]
}
