//! Curated knowledge table
//!
//! Canonical Thai drink names mapped to flavor/profile metadata.
//! Ordered slice so prefix matching walks entries deterministically;
//! the exact-match index is built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use shared::models::{BaseCategory, KnowledgeEntry};

/// Table rows in curation order
pub static ENTRIES: &[(&str, KnowledgeEntry)] = &[
    (
        "ชาไทย",
        KnowledgeEntry {
            flavor: "ชาไทยเข้มข้น",
            profile: &["sweet", "creamy", "strong"],
            base: BaseCategory::Tea,
        },
    ),
    (
        "ชานม",
        KnowledgeEntry {
            flavor: "ชานมหอมนุ่ม",
            profile: &["sweet", "creamy"],
            base: BaseCategory::Tea,
        },
    ),
    (
        "ชานมเย็น",
        KnowledgeEntry {
            flavor: "ชานมเย็นหวานมัน",
            profile: &["sweet", "creamy", "refreshing"],
            base: BaseCategory::Tea,
        },
    ),
    (
        "ชาเขียว",
        KnowledgeEntry {
            flavor: "ชาเขียวกลิ่นใบชา",
            profile: &["earthy", "refreshing"],
            base: BaseCategory::Tea,
        },
    ),
    (
        "ชาเขียวนม",
        KnowledgeEntry {
            flavor: "ชาเขียวนมหอมมัน",
            profile: &["sweet", "creamy", "earthy"],
            base: BaseCategory::Tea,
        },
    ),
    (
        "ชาดำเย็น",
        KnowledgeEntry {
            flavor: "ชาดำเข้มหอมควันไฟ",
            profile: &["bold", "refreshing"],
            base: BaseCategory::Tea,
        },
    ),
    (
        "ชามะนาว",
        KnowledgeEntry {
            flavor: "ชามะนาวเปรี้ยวหวาน",
            profile: &["tangy", "refreshing"],
            base: BaseCategory::Tea,
        },
    ),
    (
        "เอสเพรสโซ",
        KnowledgeEntry {
            flavor: "เอสเพรสโซคั่วเข้ม",
            profile: &["bitter", "strong"],
            base: BaseCategory::Coffee,
        },
    ),
    (
        "อเมริกาโน่",
        KnowledgeEntry {
            flavor: "อเมริกาโน่กลมกล่อม",
            profile: &["bitter", "light"],
            base: BaseCategory::Coffee,
        },
    ),
    (
        "ลาเต้",
        KnowledgeEntry {
            flavor: "ลาเต้นมนุ่ม",
            profile: &["creamy", "mild"],
            base: BaseCategory::Coffee,
        },
    ),
    (
        "คาปูชิโน่",
        KnowledgeEntry {
            flavor: "คาปูชิโน่ฟองนมหนา",
            profile: &["creamy", "foamy"],
            base: BaseCategory::Coffee,
        },
    ),
    (
        "มอคค่า",
        KnowledgeEntry {
            flavor: "มอคค่าช็อกโกแลตเข้ม",
            profile: &["sweet", "chocolatey"],
            base: BaseCategory::Coffee,
        },
    ),
    (
        "กาแฟโบราณ",
        KnowledgeEntry {
            flavor: "กาแฟโบราณหอมไหม้",
            profile: &["sweet", "strong"],
            base: BaseCategory::Coffee,
        },
    ),
    (
        "โกโก้",
        KnowledgeEntry {
            flavor: "โกโก้เข้มข้น",
            profile: &["sweet", "chocolatey"],
            base: BaseCategory::Chocolate,
        },
    ),
    (
        "ช็อกโกแลต",
        KnowledgeEntry {
            flavor: "ช็อกโกแลตแท้",
            profile: &["sweet", "chocolatey", "dessert"],
            base: BaseCategory::Chocolate,
        },
    ),
    (
        "นมสด",
        KnowledgeEntry {
            flavor: "นมสดพาสเจอร์ไรส์",
            profile: &["milky", "clean"],
            base: BaseCategory::Milk,
        },
    ),
    (
        "นมชมพู",
        KnowledgeEntry {
            flavor: "นมเย็นกลิ่นซาลา",
            profile: &["sweet", "dessert"],
            base: BaseCategory::Milk,
        },
    ),
    (
        "สตรอว์เบอร์รี่สมูทตี้",
        KnowledgeEntry {
            flavor: "สตรอว์เบอร์รี่สด",
            profile: &["fruity", "sweet"],
            base: BaseCategory::Fruit,
        },
    ),
    (
        "มะม่วงปั่น",
        KnowledgeEntry {
            flavor: "มะม่วงสุกปั่น",
            profile: &["fruity", "sweet"],
            base: BaseCategory::Fruit,
        },
    ),
    (
        "โซดามะนาว",
        KnowledgeEntry {
            flavor: "โซดามะนาวซ่า",
            profile: &["fizzy", "tangy"],
            base: BaseCategory::Soda,
        },
    ),
    (
        "แดงโซดา",
        KnowledgeEntry {
            flavor: "น้ำแดงโซดา",
            profile: &["fizzy", "sweet"],
            base: BaseCategory::Soda,
        },
    ),
    (
        "บราวน์ชูการ์",
        KnowledgeEntry {
            flavor: "น้ำตาลทรายแดงเคี่ยว",
            profile: &["caramel", "dessert"],
            base: BaseCategory::Dessert,
        },
    ),
    (
        "ไมโลภูเขาไฟ",
        KnowledgeEntry {
            flavor: "ไมโลปั่นโรยผงไมโล",
            profile: &["chocolatey", "dessert"],
            base: BaseCategory::Dessert,
        },
    ),
];

/// Exact-key index over [`ENTRIES`]
pub static INDEX: LazyLock<HashMap<&'static str, &'static KnowledgeEntry>> =
    LazyLock::new(|| ENTRIES.iter().map(|(k, v)| (*k, v)).collect());
