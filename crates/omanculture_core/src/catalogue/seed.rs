//! Built-in figure list used when no bundled document can be loaded.
//!
//! # Invariants
//! - Contains at least one figure, so `FigureService::featured` never fails
//!   on seed data.
//! - Ids are unique and match the bundled document authoring.

use crate::model::category::Category;
use crate::model::figure::{Figure, FigureId};

struct SeedFigure {
    id: FigureId,
    name_en: &'static str,
    name_ar: &'static str,
    category: Category,
    image_url: &'static str,
    description_en: &'static str,
    description_ar: &'static str,
    biography_en: &'static str,
    biography_ar: &'static str,
    achievements_en: &'static [&'static str],
    achievements_ar: &'static [&'static str],
    era: &'static str,
    years_active: u32,
    works_count: u32,
}

impl SeedFigure {
    fn to_figure(&self) -> Figure {
        Figure {
            id: self.id,
            name_en: self.name_en.to_string(),
            name_ar: self.name_ar.to_string(),
            category: self.category,
            image_url: self.image_url.to_string(),
            description_en: self.description_en.to_string(),
            description_ar: self.description_ar.to_string(),
            biography_en: self.biography_en.to_string(),
            biography_ar: self.biography_ar.to_string(),
            achievements_en: to_owned_list(self.achievements_en),
            achievements_ar: to_owned_list(self.achievements_ar),
            era: self.era.to_string(),
            years_active: self.years_active,
            works_count: self.works_count,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Builds the seed figures in authoring order.
pub fn seed_figures() -> Vec<Figure> {
    SEED_FIGURES.iter().map(SeedFigure::to_figure).collect()
}

const SEED_FIGURES: &[SeedFigure] = &[
    SeedFigure {
        id: 1,
        name_en: "Sultan Qaboos bin Said",
        name_ar: "السلطان قابوس بن سعيد",
        category: Category::HistoricalLeaders,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/52/Qaboos_bin_Said.jpg/440px-Qaboos_bin_Said.jpg",
        description_en: "The Sultan of Oman from 1970 to 2020",
        description_ar: "سلطان عُمان من 1970 إلى 2020",
        biography_en: "Sultan Qaboos bin Said Al Said was the Sultan of Oman from 23 July 1970 until his death in 2020. He rose to power after overthrowing his father, Said bin Taimur, in a palace coup in 1970. He was the longest-serving ruler in the Middle East and the Arab world at the time of his death.",
        biography_ar: "السلطان قابوس بن سعيد آل سعيد كان سلطان عُمان من 23 يوليو 1970 حتى وفاته في 2020. وصل إلى السلطة بعد الإطاحة بوالده سعيد بن تيمور في انقلاب قصر عام 1970. كان أطول حاكم خدمة في الشرق الأوسط والعالم العربي وقت وفاته.",
        achievements_en: &[
            "Modernized Oman's infrastructure",
            "Established diplomatic relations worldwide",
            "Founded Sultan Qaboos University",
            "Developed healthcare and education systems",
        ],
        achievements_ar: &[
            "تحديث البنية التحتية لعُمان",
            "إقامة علاقات دبلوماسية عالمية",
            "تأسيس جامعة السلطان قابوس",
            "تطوير أنظمة الرعاية الصحية والتعليم",
        ],
        era: "1940-2020",
        years_active: 50,
        works_count: 12,
    },
    SeedFigure {
        id: 2,
        name_en: "Said bin Sultan",
        name_ar: "سعيد بن سلطان",
        category: Category::HistoricalLeaders,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/Seyyid_Said%2C_Sultan_of_Muscat_and_Oman.jpg/440px-Seyyid_Said%2C_Sultan_of_Muscat_and_Oman.jpg",
        description_en: "Sultan of Muscat and Oman (1806-1856)",
        description_ar: "سلطان مسقط وعُمان (1806-1856)",
        biography_en: "Said bin Sultan was the Sultan of Muscat and Oman from 1806 to 1856. He built a commercial empire and moved his capital to Zanzibar, creating a maritime trading network across the Indian Ocean.",
        biography_ar: "سعيد بن سلطان كان سلطان مسقط وعُمان من 1806 إلى 1856. بنى إمبراطورية تجارية ونقل عاصمته إلى زنجبار، مُنشئًا شبكة تجارة بحرية عبر المحيط الهندي.",
        achievements_en: &[
            "Expanded Omani influence to East Africa",
            "Established Zanzibar as a trading hub",
            "Signed treaties with Western powers",
        ],
        achievements_ar: &[
            "توسيع النفوذ العُماني إلى شرق أفريقيا",
            "تأسيس زنجبار كمركز تجاري",
            "توقيع معاهدات مع القوى الغربية",
        ],
        era: "1791-1856",
        years_active: 50,
        works_count: 8,
    },
    SeedFigure {
        id: 3,
        name_en: "Sultan Haitham bin Tariq",
        name_ar: "السلطان هيثم بن طارق",
        category: Category::HistoricalLeaders,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8a/Haitham_bin_Tariq_Al_Said.jpg/440px-Haitham_bin_Tariq_Al_Said.jpg",
        description_en: "Current Sultan of Oman since 2020",
        description_ar: "سلطان عُمان الحالي منذ 2020",
        biography_en: "Sultan Haitham bin Tariq Al Said is the current Sultan of Oman, ascending to the throne on 11 January 2020 following the death of Sultan Qaboos. He previously served as Minister of Heritage and Culture.",
        biography_ar: "السلطان هيثم بن طارق آل سعيد هو سلطان عُمان الحالي، اعتلى العرش في 11 يناير 2020 بعد وفاة السلطان قابوس. شغل سابقًا منصب وزير التراث والثقافة.",
        achievements_en: &[
            "Launched Oman Vision 2040",
            "Economic diversification initiatives",
            "Continued modernization efforts",
        ],
        achievements_ar: &[
            "إطلاق رؤية عُمان 2040",
            "مبادرات التنويع الاقتصادي",
            "استمرار جهود التحديث",
        ],
        era: "1954-Present",
        years_active: 4,
        works_count: 5,
    },
    SeedFigure {
        id: 4,
        name_en: "Abu Muslim al-Bahlani",
        name_ar: "أبو مسلم البهلاني",
        category: Category::PoetsWriters,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Renowned Omani poet and scholar",
        description_ar: "شاعر وعالم عُماني مشهور",
        biography_en: "Abu Muslim Nasir bin Salim bin Udayyim al-Rawahi al-Bahlani was one of the most famous Omani poets. His poetry covered religious, social, and patriotic themes.",
        biography_ar: "أبو مسلم ناصر بن سالم بن عديم الرواحي البهلاني كان من أشهر الشعراء العُمانيين. تناول شعره موضوعات دينية واجتماعية ووطنية.",
        achievements_en: &[
            "Authored numerous poetry collections",
            "Contributed to Omani literary heritage",
            "Influenced generations of poets",
        ],
        achievements_ar: &[
            "تأليف مجموعات شعرية عديدة",
            "المساهمة في التراث الأدبي العُماني",
            "التأثير على أجيال من الشعراء",
        ],
        era: "1860-1920",
        years_active: 40,
        works_count: 15,
    },
    SeedFigure {
        id: 5,
        name_en: "Abdullah al-Tai",
        name_ar: "عبدالله الطائي",
        category: Category::PoetsWriters,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Pioneer of modern Omani literature",
        description_ar: "رائد الأدب العُماني الحديث",
        biography_en: "Abdullah al-Tai was a pioneering Omani writer and journalist who played a significant role in the development of modern Omani literature and media.",
        biography_ar: "عبدالله الطائي كان كاتبًا وصحفيًا عُمانيًا رائدًا لعب دورًا مهمًا في تطوير الأدب والإعلام العُماني الحديث.",
        achievements_en: &[
            "Founded early Omani newspapers",
            "Wrote influential novels and stories",
            "Documented Omani history and culture",
        ],
        achievements_ar: &[
            "تأسيس الصحف العُمانية الأولى",
            "كتابة روايات وقصص مؤثرة",
            "توثيق التاريخ والثقافة العُمانية",
        ],
        era: "1924-1973",
        years_active: 30,
        works_count: 20,
    },
    SeedFigure {
        id: 6,
        name_en: "Salim bin Ali al-Wahaibi",
        name_ar: "سالم بن علي الوهيبي",
        category: Category::Artists,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Traditional Omani musician",
        description_ar: "موسيقي عُماني تقليدي",
        biography_en: "A master of traditional Omani music, known for preserving and performing classical Omani musical traditions.",
        biography_ar: "أستاذ في الموسيقى العُمانية التقليدية، معروف بالحفاظ على التقاليد الموسيقية العُمانية الكلاسيكية وأدائها.",
        achievements_en: &[
            "Preserved traditional Omani music",
            "Trained new generations of musicians",
            "Performed at national events",
        ],
        achievements_ar: &[
            "الحفاظ على الموسيقى العُمانية التقليدية",
            "تدريب أجيال جديدة من الموسيقيين",
            "الأداء في المناسبات الوطنية",
        ],
        era: "1950-Present",
        years_active: 50,
        works_count: 25,
    },
    SeedFigure {
        id: 7,
        name_en: "Ali Al-Habsi",
        name_ar: "علي الحبسي",
        category: Category::Sports,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8e/Ali_Al-Habsi.jpg/440px-Ali_Al-Habsi.jpg",
        description_en: "Legendary Omani football goalkeeper",
        description_ar: "حارس مرمى عُماني أسطوري",
        biography_en: "Ali Abdullah Hamed Al-Habsi is an Omani professional footballer who played as a goalkeeper. He had a successful career in the English Premier League with clubs like Bolton Wanderers and Wigan Athletic.",
        biography_ar: "علي عبدالله حامد الحبسي هو لاعب كرة قدم عُماني محترف لعب كحارس مرمى. حقق مسيرة ناجحة في الدوري الإنجليزي الممتاز مع أندية مثل بولتون واندررز وويغان أثلتيك.",
        achievements_en: &[
            "First Omani to play in Premier League",
            "Multiple Omani Player of the Year awards",
            "Over 100 caps for national team",
        ],
        achievements_ar: &[
            "أول عُماني يلعب في الدوري الممتاز",
            "جوائز متعددة لأفضل لاعب عُماني",
            "أكثر من 100 مباراة دولية",
        ],
        era: "1981-Present",
        years_active: 20,
        works_count: 100,
    },
    SeedFigure {
        id: 8,
        name_en: "Ahmed Al-Maashani",
        name_ar: "أحمد المعشني",
        category: Category::Sports,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Omani football striker",
        description_ar: "مهاجم كرة قدم عُماني",
        biography_en: "Ahmed Al-Maashani is an Omani professional footballer known for his goal-scoring abilities and contributions to the national team.",
        biography_ar: "أحمد المعشني هو لاعب كرة قدم عُماني محترف معروف بقدراته التهديفية ومساهماته في المنتخب الوطني.",
        achievements_en: &[
            "Top scorer in Omani league",
            "Key player for national team",
            "Multiple championship titles",
        ],
        achievements_ar: &[
            "هداف الدوري العُماني",
            "لاعب أساسي في المنتخب الوطني",
            "ألقاب بطولات متعددة",
        ],
        era: "1990-Present",
        years_active: 15,
        works_count: 50,
    },
    SeedFigure {
        id: 9,
        name_en: "Ahmed bin Majid",
        name_ar: "أحمد بن ماجد",
        category: Category::Scholars,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Famous Arab navigator and cartographer",
        description_ar: "ملاح ورسام خرائط عربي شهير",
        biography_en: "Ahmad ibn Majid was an Arab navigator and cartographer born in Julfar (present-day UAE/Oman region). He is considered one of the greatest navigators in history and wrote numerous texts on navigation.",
        biography_ar: "أحمد بن ماجد كان ملاحًا ورسام خرائط عربيًا ولد في جلفار. يُعتبر من أعظم الملاحين في التاريخ وكتب نصوصًا عديدة عن الملاحة.",
        achievements_en: &[
            "Authored 'Kitab al-Fawa'id'",
            "Guided Vasco da Gama to India",
            "Advanced maritime navigation techniques",
        ],
        achievements_ar: &[
            "تأليف 'كتاب الفوائد'",
            "إرشاد فاسكو دا غاما إلى الهند",
            "تطوير تقنيات الملاحة البحرية",
        ],
        era: "1421-1500",
        years_active: 50,
        works_count: 40,
    },
    SeedFigure {
        id: 10,
        name_en: "Mona Al-Said",
        name_ar: "منى آل سعيد",
        category: Category::Modern,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Omani businesswoman and entrepreneur",
        description_ar: "سيدة أعمال ورائدة أعمال عُمانية",
        biography_en: "A prominent Omani businesswoman who has contributed to the economic development of Oman through various entrepreneurial ventures.",
        biography_ar: "سيدة أعمال عُمانية بارزة ساهمت في التنمية الاقتصادية لعُمان من خلال مشاريع ريادية متنوعة.",
        achievements_en: &[
            "Founded successful businesses",
            "Promoted women entrepreneurship",
            "Contributed to economic diversification",
        ],
        achievements_ar: &[
            "تأسيس أعمال ناجحة",
            "تعزيز ريادة الأعمال النسائية",
            "المساهمة في التنويع الاقتصادي",
        ],
        era: "1970-Present",
        years_active: 25,
        works_count: 10,
    },
    SeedFigure {
        id: 11,
        name_en: "Imam Ahmed bin Said",
        name_ar: "الإمام أحمد بن سعيد",
        category: Category::HistoricalLeaders,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Founder of the Al Said dynasty",
        description_ar: "مؤسس سلالة آل سعيد",
        biography_en: "Imam Ahmed bin Said Al Busaidi was the founder of the current ruling Al Said dynasty of Oman. He united Oman and expelled the Persians, establishing a powerful maritime state.",
        biography_ar: "الإمام أحمد بن سعيد البوسعيدي كان مؤسس سلالة آل سعيد الحاكمة حاليًا في عُمان. وحّد عُمان وطرد الفرس، مؤسسًا دولة بحرية قوية.",
        achievements_en: &[
            "Founded the Al Said dynasty in 1744",
            "Expelled Persian invaders from Oman",
            "Established Omani naval supremacy",
            "United the country under one rule",
        ],
        achievements_ar: &[
            "تأسيس سلالة آل سعيد عام 1744",
            "طرد الغزاة الفرس من عُمان",
            "تأسيس السيادة البحرية العُمانية",
            "توحيد البلاد تحت حكم واحد",
        ],
        era: "1694-1783",
        years_active: 39,
        works_count: 6,
    },
    SeedFigure {
        id: 12,
        name_en: "Hilal bin Badr al-Busaidi",
        name_ar: "هلال بن بدر البوسعيدي",
        category: Category::PoetsWriters,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Contemporary Omani poet laureate",
        description_ar: "شاعر عُماني معاصر",
        biography_en: "Hilal bin Badr al-Busaidi is a celebrated contemporary Omani poet known for his eloquent Arabic poetry that celebrates Omani heritage and culture.",
        biography_ar: "هلال بن بدر البوسعيدي شاعر عُماني معاصر مشهور بشعره العربي البليغ الذي يحتفي بالتراث والثقافة العُمانية.",
        achievements_en: &[
            "Published multiple poetry collections",
            "Won national poetry awards",
            "Represented Oman in Arab poetry festivals",
        ],
        achievements_ar: &[
            "نشر مجموعات شعرية متعددة",
            "فاز بجوائز شعرية وطنية",
            "مثّل عُمان في مهرجانات الشعر العربي",
        ],
        era: "1960-Present",
        years_active: 45,
        works_count: 18,
    },
    SeedFigure {
        id: 13,
        name_en: "Jokha Alharthi",
        name_ar: "جوخة الحارثي",
        category: Category::PoetsWriters,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "First Arab winner of Man Booker International Prize",
        description_ar: "أول عربية تفوز بجائزة مان بوكر الدولية",
        biography_en: "Jokha Alharthi is an Omani author who made history as the first Arabic-language writer to win the Man Booker International Prize in 2019 for her novel 'Celestial Bodies'.",
        biography_ar: "جوخة الحارثي كاتبة عُمانية صنعت التاريخ كأول كاتبة عربية تفوز بجائزة مان بوكر الدولية عام 2019 عن روايتها 'سيدات القمر'.",
        achievements_en: &[
            "Won Man Booker International Prize 2019",
            "Author of 'Celestial Bodies'",
            "Professor at Sultan Qaboos University",
            "Multiple literary awards",
        ],
        achievements_ar: &[
            "فازت بجائزة مان بوكر الدولية 2019",
            "مؤلفة رواية 'سيدات القمر'",
            "أستاذة في جامعة السلطان قابوس",
            "جوائز أدبية متعددة",
        ],
        era: "1978-Present",
        years_active: 20,
        works_count: 8,
    },
    SeedFigure {
        id: 14,
        name_en: "Anwar Sonya",
        name_ar: "أنور سونيا",
        category: Category::Artists,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Pioneer of Omani visual arts",
        description_ar: "رائد الفنون البصرية العُمانية",
        biography_en: "Anwar Sonya is considered one of the pioneers of contemporary visual arts in Oman, known for blending traditional Omani themes with modern artistic techniques.",
        biography_ar: "يُعتبر أنور سونيا من رواد الفنون البصرية المعاصرة في عُمان، معروف بدمج الموضوعات العُمانية التقليدية مع التقنيات الفنية الحديثة.",
        achievements_en: &[
            "Exhibited internationally",
            "Founded art education programs",
            "Preserved Omani artistic heritage",
        ],
        achievements_ar: &[
            "عرض أعماله دوليًا",
            "أسس برامج تعليم الفن",
            "حافظ على التراث الفني العُماني",
        ],
        era: "1948-Present",
        years_active: 50,
        works_count: 200,
    },
    SeedFigure {
        id: 15,
        name_en: "Imad Al-Hosni",
        name_ar: "عماد الحوسني",
        category: Category::Sports,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Omani football captain and defender",
        description_ar: "قائد ومدافع المنتخب العُماني",
        biography_en: "Imad Al-Hosni is a professional Omani footballer who has served as captain of the Oman national team. Known for his leadership and defensive skills.",
        biography_ar: "عماد الحوسني لاعب كرة قدم عُماني محترف شغل منصب قائد المنتخب العُماني. معروف بقيادته ومهاراته الدفاعية.",
        achievements_en: &[
            "Captain of Oman national team",
            "Gulf Cup winner",
            "Over 80 international caps",
        ],
        achievements_ar: &[
            "قائد المنتخب العُماني",
            "فائز بكأس الخليج",
            "أكثر من 80 مباراة دولية",
        ],
        era: "1987-Present",
        years_active: 18,
        works_count: 85,
    },
    SeedFigure {
        id: 16,
        name_en: "Mohsin Al-Ghassani",
        name_ar: "محسن الغساني",
        category: Category::Sports,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Omani rally driver champion",
        description_ar: "بطل سباقات الراليات العُماني",
        biography_en: "Mohsin Al-Ghassani is a renowned Omani rally driver who has represented Oman in international motorsport competitions and won multiple regional championships.",
        biography_ar: "محسن الغساني سائق راليات عُماني مشهور مثّل عُمان في مسابقات رياضة السيارات الدولية وفاز ببطولات إقليمية متعددة.",
        achievements_en: &[
            "Multiple Middle East Rally Championship titles",
            "Represented Oman in World Rally Championship",
            "Promoted motorsport in Oman",
        ],
        achievements_ar: &[
            "ألقاب متعددة في بطولة الشرق الأوسط للراليات",
            "مثّل عُمان في بطولة العالم للراليات",
            "روّج لرياضة السيارات في عُمان",
        ],
        era: "1975-Present",
        years_active: 30,
        works_count: 45,
    },
    SeedFigure {
        id: 17,
        name_en: "Sheikh Ahmed al-Khalili",
        name_ar: "الشيخ أحمد الخليلي",
        category: Category::Scholars,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Grand Mufti of Oman",
        description_ar: "المفتي العام لسلطنة عُمان",
        biography_en: "Sheikh Ahmed bin Hamad al-Khalili is the Grand Mufti of Oman, the highest religious authority in the country. He is known for his scholarly works and moderate Islamic teachings.",
        biography_ar: "الشيخ أحمد بن حمد الخليلي هو المفتي العام لسلطنة عُمان، أعلى سلطة دينية في البلاد. معروف بأعماله العلمية وتعاليمه الإسلامية المعتدلة.",
        achievements_en: &[
            "Appointed Grand Mufti in 1975",
            "Authored numerous Islamic scholarly works",
            "Promoted interfaith dialogue",
            "Established religious education programs",
        ],
        achievements_ar: &[
            "عُيّن مفتيًا عامًا عام 1975",
            "ألّف أعمالًا علمية إسلامية عديدة",
            "روّج للحوار بين الأديان",
            "أسس برامج التعليم الديني",
        ],
        era: "1942-Present",
        years_active: 49,
        works_count: 35,
    },
    SeedFigure {
        id: 18,
        name_en: "Dr. Asila Al-Maamari",
        name_ar: "د. أصيلة المعمري",
        category: Category::Scholars,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Omani scientist and researcher",
        description_ar: "عالمة وباحثة عُمانية",
        biography_en: "Dr. Asila Al-Maamari is a prominent Omani scientist known for her research contributions in environmental science and sustainable development.",
        biography_ar: "د. أصيلة المعمري عالمة عُمانية بارزة معروفة بمساهماتها البحثية في علوم البيئة والتنمية المستدامة.",
        achievements_en: &[
            "Published research in international journals",
            "Contributed to environmental policies",
            "Mentored young Omani scientists",
        ],
        achievements_ar: &[
            "نشرت أبحاثًا في مجلات دولية",
            "ساهمت في السياسات البيئية",
            "أرشدت العلماء العُمانيين الشباب",
        ],
        era: "1970-Present",
        years_active: 25,
        works_count: 30,
    },
    SeedFigure {
        id: 19,
        name_en: "Khalid Al-Sinani",
        name_ar: "خالد السناني",
        category: Category::Modern,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Omani tech entrepreneur",
        description_ar: "رائد أعمال تقني عُماني",
        biography_en: "Khalid Al-Sinani is a leading Omani tech entrepreneur who has founded multiple successful startups and contributed to Oman's digital transformation.",
        biography_ar: "خالد السناني رائد أعمال تقني عُماني رائد أسس شركات ناشئة ناجحة متعددة وساهم في التحول الرقمي لعُمان.",
        achievements_en: &[
            "Founded successful tech startups",
            "Promoted digital innovation in Oman",
            "Mentored young entrepreneurs",
        ],
        achievements_ar: &[
            "أسس شركات تقنية ناجحة",
            "روّج للابتكار الرقمي في عُمان",
            "أرشد رواد الأعمال الشباب",
        ],
        era: "1985-Present",
        years_active: 15,
        works_count: 8,
    },
    SeedFigure {
        id: 20,
        name_en: "Fatma Al-Nabhani",
        name_ar: "فاطمة النبهاني",
        category: Category::Modern,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a5/No_image_available.svg/300px-No_image_available.svg.png",
        description_en: "Omani tennis pioneer",
        description_ar: "رائدة التنس العُمانية",
        biography_en: "Fatma Al-Nabhani is a pioneering Omani tennis player who became the first Omani woman to compete professionally in international tennis tournaments.",
        biography_ar: "فاطمة النبهاني لاعبة تنس عُمانية رائدة أصبحت أول امرأة عُمانية تنافس باحتراف في بطولات التنس الدولية.",
        achievements_en: &[
            "First Omani woman in professional tennis",
            "Represented Oman in Fed Cup",
            "Inspired women in sports",
            "Multiple national titles",
        ],
        achievements_ar: &[
            "أول امرأة عُمانية في التنس المحترف",
            "مثّلت عُمان في كأس الاتحاد",
            "ألهمت النساء في الرياضة",
            "ألقاب وطنية متعددة",
        ],
        era: "1991-Present",
        years_active: 15,
        works_count: 25,
    },
];

#[cfg(test)]
mod tests {
    use super::seed_figures;
    use crate::model::category::Category;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique_and_non_empty() {
        let figures = seed_figures();
        assert_eq!(figures.len(), 20);
        let ids: HashSet<_> = figures.iter().map(|figure| figure.id).collect();
        assert_eq!(ids.len(), figures.len());
    }

    #[test]
    fn every_category_has_seed_entries() {
        let figures = seed_figures();
        for category in Category::ALL {
            assert!(
                figures.iter().any(|figure| figure.category == category),
                "no seed figure for {}",
                category.id()
            );
        }
    }
}
