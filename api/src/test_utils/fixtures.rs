//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::NaiveDate;

use crate::adapters::StaticCatalog;
use crate::domain::entities::booking::Guest;
use crate::domain::entities::{
    BookingRequest, Category, Contact, DurationBucket, Experience, ExperienceId, FieldBag,
    FieldValue, GeoPoint, Price, Slot, UploadMeta, Vendor, VendorId,
};

pub use crate::adapters::seed::guwahati_experiences;

/// Create a test vendor with default values
pub fn test_vendor() -> Vendor {
    Vendor {
        id: VendorId::from("v-test"),
        name: "Test Host".to_string(),
        bio: "Hosts test experiences.".to_string(),
        role: "Guide".to_string(),
        verified: true,
        location: "Guwahati".to_string(),
        rating: 4.5,
        reviews: 12,
        contact: Contact {
            phone: "+91 90000 00000".to_string(),
            email: "host@example.com".to_string(),
        },
    }
}

/// Create a test experience hosted by `test_vendor()`
pub fn test_experience() -> Experience {
    test_experience_with("e-test", "Test Walk", DurationBucket::DeepDive)
}

/// Create a test experience with a specific id, title and bucket
pub fn test_experience_with(id: &str, title: &str, duration: DurationBucket) -> Experience {
    Experience {
        id: ExperienceId::from(id),
        title: title.to_string(),
        vendor_id: test_vendor().id,
        category: Category::Heritage,
        duration,
        price: Price::inr(350),
        description: format!("{} through old Guwahati.", title),
        location: GeoPoint {
            lat: 26.1445,
            lng: 91.7362,
        },
        languages: vec!["English".to_string(), "Assamese".to_string()],
        phrases: Vec::new(),
        highlights: Vec::new(),
    }
}

/// One experience per bucket: 30m, 60m and 240m
pub fn bucket_catalog() -> Vec<Experience> {
    vec![
        test_experience_with("b30", "Tea Tasting", DurationBucket::QuickBite),
        test_experience_with("b60", "Ghat Walk", DurationBucket::DeepDive),
        test_experience_with("b240", "Hill Trek", DurationBucket::HalfDay),
    ]
}

/// `bucket_catalog()` behind a catalog index
pub fn bucket_catalog_index() -> StaticCatalog {
    StaticCatalog::new(bucket_catalog(), vec![test_vendor()]).unwrap()
}

/// Create a booking request for `test_experience()`
pub fn test_booking_request() -> BookingRequest {
    let experience = test_experience();
    BookingRequest {
        experience_id: experience.id,
        vendor_id: experience.vendor_id,
        slot: Slot::first(),
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        guest: Guest {
            name: "Asha Das".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
        },
        payment_method: "upi".to_string(),
        amount: experience.price,
    }
}

pub fn test_upload(file_name: &str, size_bytes: u64) -> UploadMeta {
    UploadMeta {
        file_name: file_name.to_string(),
        size_bytes,
        content_type: None,
    }
}

/// Every onboarding field filled with valid values
pub fn complete_onboarding_bag() -> FieldBag {
    let mut bag = FieldBag::new();
    let texts = [
        ("business_name", "Sualkuchi Looms"),
        ("full_name", "Biren Kalita"),
        ("email", "biren@example.com"),
        ("phone", "+91 98765 43210"),
        ("experience_years", "12"),
        (
            "description",
            "Third generation muga silk weaver from Sualkuchi.",
        ),
        ("hourly_rate", "500"),
        ("max_group_size", "10"),
        ("account_name", "Biren Kalita"),
        ("account_number", "123456789012"),
        ("ifsc_code", "sbin0001234"),
    ];
    for (name, value) in texts {
        bag.insert(name, FieldValue::text(value));
    }

    let lists: [(&str, &[&str]); 4] = [
        ("expertise", &["Weaving", "Silk"]),
        ("languages", &["Assamese", "English"]),
        ("service_areas", &["Sualkuchi"]),
        ("availability", &["Weekends"]),
    ];
    for (name, items) in lists {
        bag.insert(
            name,
            FieldValue::List(items.iter().map(|s| s.to_string()).collect()),
        );
    }

    for name in ["profile_photo", "id_proof", "address_proof"] {
        bag.insert(name, FieldValue::Upload(test_upload(&format!("{}.jpg", name), 200_000)));
    }
    bag.insert("accept_terms", FieldValue::Flag(true));
    bag.insert("accept_code_of_conduct", FieldValue::Flag(true));
    bag
}
