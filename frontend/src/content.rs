// Marketing copy and price lists shown across the site.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sauna {
    pub id: &'static str,
    pub name: &'static str,
    pub capacity: u8,
    pub weekday_price: u32,
    pub weekend_price: u32,
    pub description: &'static str,
    pub image: &'static str,
    pub image_fallback: &'static str,
}

pub const SAUNAS: &[Sauna] = &[
    Sauna {
        id: "russkaya",
        name: "Русская баня на дровах",
        capacity: 8,
        weekday_price: 3500,
        weekend_price: 4200,
        description: "Сруб из карельской сосны, печь-каменка на берёзовых дровах, купель с ледяной водой.",
        image: "/assets/saunas/russkaya.svg",
        image_fallback: "/assets/placeholder.svg",
    },
    Sauna {
        id: "finskaya",
        name: "Финская сауна",
        capacity: 6,
        weekday_price: 3000,
        weekend_price: 3600,
        description: "Сухой жар до 90 °C, панорамное окно на озеро и зона отдыха с камином.",
        image: "/assets/saunas/finskaya.svg",
        image_fallback: "/assets/placeholder.svg",
    },
    Sauna {
        id: "chan",
        name: "Банный чан под открытым небом",
        capacity: 10,
        weekday_price: 4500,
        weekend_price: 5200,
        description: "Чугунный чан на 2 тонны воды с травяным настоем, подогрев на живом огне.",
        image: "/assets/saunas/chan.svg",
        image_fallback: "/assets/placeholder.svg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌿",
        title: "Парение вениками",
        text: "Пармейстер подберёт веник из берёзы, дуба или эвкалипта и проведёт классическое парение.",
    },
    Service {
        icon: "🧖",
        title: "Банные программы",
        text: "Скрабы на мёде и соли, обёртывания и травяные запарки по авторским рецептам.",
    },
    Service {
        icon: "🍵",
        title: "Чайная церемония",
        text: "Иван-чай, сбор с чабрецом и морошковое варенье в самоваре после парной.",
    },
    Service {
        icon: "🎉",
        title: "Праздники и корпоративы",
        text: "Закроем комплекс под ваше мероприятие, поможем с меню и трансфером.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extra {
    pub name: &'static str,
    pub price: &'static str,
}

pub const EXTRAS: &[Extra] = &[
    Extra { name: "Веник берёзовый", price: "400 ₽" },
    Extra { name: "Веник дубовый", price: "500 ₽" },
    Extra { name: "Парение от пармейстера (30 мин)", price: "2 500 ₽" },
    Extra { name: "Медовый скраб", price: "900 ₽" },
    Extra { name: "Самовар с травяным чаем", price: "700 ₽" },
    Extra { name: "Комплект полотенец и простыня", price: "300 ₽" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub date: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Андрей К.",
        rating: 5,
        text: "Лучшая баня на дровах в области. Пар мягкий, купель ледяная, чай из самовара просто сказка.",
        date: "сентябрь 2026",
    },
    Testimonial {
        author: "Марина и Олег",
        rating: 5,
        text: "Отмечали годовщину в чане под звёздами. Персонал внимательный, всё подготовили заранее.",
        date: "август 2026",
    },
    Testimonial {
        author: "Сергей",
        rating: 4,
        text: "Приезжали компанией из восьми человек, места хватило всем. В выходные лучше бронировать заранее.",
        date: "июль 2026",
    },
    Testimonial {
        author: "Екатерина",
        rating: 5,
        text: "Пармейстер Илья настоящий мастер. После парения как будто заново родилась.",
        date: "июнь 2026",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Что взять с собой?",
        answer: "Достаточно сменной одежды. Полотенца, простыни, тапочки и шапки для парной выдаём на месте.",
    },
    FaqEntry {
        question: "Какое минимальное время аренды?",
        answer: "Два часа. В пятницу, субботу и воскресенье действует выходной тариф.",
    },
    FaqEntry {
        question: "Можно ли привезти свою еду?",
        answer: "Да, в зоне отдыха есть холодильник, посуда и мангал. Просим не приносить крепкий алкоголь.",
    },
    FaqEntry {
        question: "Есть ли парковка?",
        answer: "Бесплатная охраняемая парковка на 15 автомобилей прямо у входа.",
    },
    FaqEntry {
        question: "Как отменить или перенести бронь?",
        answer: "Позвоните нам или напишите в мессенджер. Условия возврата предоплаты описаны на странице «Отмена брони».",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub fallback: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/assets/gallery/parnaya.svg", fallback: "/assets/placeholder.svg", alt: "Парная русской бани" },
    GalleryImage { src: "/assets/gallery/kupel.svg", fallback: "/assets/placeholder.svg", alt: "Купель с ледяной водой" },
    GalleryImage { src: "/assets/gallery/chan-night.svg", fallback: "/assets/placeholder.svg", alt: "Чан вечером" },
    GalleryImage { src: "/assets/gallery/otdyh.svg", fallback: "/assets/placeholder.svg", alt: "Зона отдыха с камином" },
    GalleryImage { src: "/assets/gallery/ozero.svg", fallback: "/assets/placeholder.svg", alt: "Вид на озеро" },
    GalleryImage { src: "/assets/gallery/samovar.svg", fallback: "/assets/placeholder.svg", alt: "Самовар и травяной чай" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub body: &'static [&'static str],
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "kak-pravilno-paritsya",
        title: "Как правильно париться: пять заходов без спешки",
        date: "2 октября 2026",
        summary: "Разбираем, сколько заходов делать, когда окунаться в купель и почему не стоит сразу лезть на верхний полок.",
        image: "/assets/blog/paritsya.svg",
        body: &[
            "Первый заход всегда разогревающий: 5–7 минут на нижнем полке без веника. Тело привыкает к жару, поры раскрываются.",
            "Со второго захода подключаем веник. Пармейстер начинает с лёгких опахиваний и только потом переходит к похлопываниям.",
            "Между заходами отдыхайте не меньше 10 минут и пейте травяной чай. Купель хороша после третьего и четвёртого захода.",
            "Пятый заход завершающий, короткий и мягкий. После него не торопитесь одеваться: дайте телу остыть естественно.",
        ],
    },
    BlogPost {
        slug: "otkryli-chan",
        title: "Открыли банный чан у озера",
        date: "14 августа 2026",
        summary: "Новый чугунный чан на 10 человек с травяным настоем и видом на закат.",
        image: "/assets/blog/chan.svg",
        body: &[
            "Этим летом мы установили двухтонный чугунный чан прямо на берегу. Вода нагревается на живом огне до 40 °C.",
            "В воду добавляем сбор из можжевельника, мяты и зверобоя. Чан можно забронировать отдельно или вместе с русской баней.",
        ],
    },
    BlogPost {
        slug: "veniki-sezon",
        title: "Заготовили веники на сезон",
        date: "1 июля 2026",
        summary: "Берёза, дуб, липа и можжевельник: рассказываем, какой веник выбрать.",
        image: "/assets/blog/veniki.svg",
        body: &[
            "Берёзовый веник универсален и подходит для первого знакомства с баней.",
            "Дубовый плотнее и держит жар дольше, его любят опытные парильщики.",
            "Можжевеловый колется, но отлично разгоняет кровь. Перед парением его обязательно запаривают кипятком.",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vacancy {
    pub id: &'static str,
    pub title: &'static str,
    pub schedule: &'static str,
    pub salary: &'static str,
    pub duties: &'static [&'static str],
    pub requirements: &'static [&'static str],
}

pub const VACANCIES: &[Vacancy] = &[
    Vacancy {
        id: "parmeister",
        title: "Пармейстер",
        schedule: "2/2, с 10:00 до 23:00",
        salary: "от 70 000 ₽",
        duties: &[
            "Проведение парений и банных программ",
            "Подготовка веников и запарок",
            "Консультирование гостей",
        ],
        requirements: &[
            "Опыт работы пармейстером от 1 года",
            "Знание техники безопасности в парной",
            "Доброжелательность и аккуратность",
        ],
    },
    Vacancy {
        id: "administrator",
        title: "Администратор",
        schedule: "2/2, с 9:30 до 23:30",
        salary: "от 55 000 ₽",
        duties: &[
            "Приём звонков и бронирований",
            "Встреча и размещение гостей",
            "Работа с кассой и YClients",
        ],
        requirements: &[
            "Грамотная речь",
            "Уверенный пользователь ПК",
            "Опыт в сфере гостеприимства приветствуется",
        ],
    },
    Vacancy {
        id: "istopnik",
        title: "Истопник",
        schedule: "5/2, с 8:00 до 17:00",
        salary: "от 45 000 ₽",
        duties: &[
            "Растопка печей и поддержание температуры",
            "Заготовка и укладка дров",
            "Уход за территорией",
        ],
        requirements: &["Физическая выносливость", "Ответственность"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CancellationRule {
    pub when: &'static str,
    pub refund: &'static str,
}

pub const CANCELLATION_RULES: &[CancellationRule] = &[
    CancellationRule { when: "Более чем за 48 часов до визита", refund: "100% предоплаты" },
    CancellationRule { when: "От 24 до 48 часов до визита", refund: "50% предоплаты" },
    CancellationRule { when: "Менее чем за 24 часа до визита", refund: "Предоплата не возвращается" },
    CancellationRule { when: "Неявка без предупреждения", refund: "Предоплата не возвращается" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Илья Смирнов", role: "Старший пармейстер", photo: "/assets/team/ilya.svg" },
    TeamMember { name: "Анна Воронцова", role: "Управляющая", photo: "/assets/team/anna.svg" },
    TeamMember { name: "Пётр Лукин", role: "Истопник и хранитель печей", photo: "/assets/team/petr.svg" },
];

pub fn sauna_by_id(id: &str) -> Option<&'static Sauna> {
    SAUNAS.iter().find(|s| s.id == id)
}

pub fn post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug == slug)
}

pub fn vacancy_by_id(id: &str) -> Option<&'static Vacancy> {
    VACANCIES.iter().find(|v| v.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_slugs_are_unique() {
        let saunas: HashSet<_> = SAUNAS.iter().map(|s| s.id).collect();
        assert_eq!(saunas.len(), SAUNAS.len());
        let posts: HashSet<_> = BLOG_POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(posts.len(), BLOG_POSTS.len());
        let vacancies: HashSet<_> = VACANCIES.iter().map(|v| v.id).collect();
        assert_eq!(vacancies.len(), VACANCIES.len());
    }

    #[test]
    fn lookups_find_known_entries() {
        assert_eq!(sauna_by_id("chan").map(|s| s.capacity), Some(10));
        assert!(post_by_slug("otkryli-chan").is_some());
        assert_eq!(vacancy_by_id("administrator").map(|v| v.title), Some("Администратор"));
        assert!(sauna_by_id("hammam").is_none());
        assert!(post_by_slug("").is_none());
    }

    #[test]
    fn weekend_rates_are_not_cheaper() {
        for sauna in SAUNAS {
            assert!(sauna.weekend_price >= sauna.weekday_price, "{}", sauna.id);
        }
    }

    #[test]
    fn testimonial_ratings_are_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn every_referenced_image_ships_in_assets() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let images = SAUNAS
            .iter()
            .flat_map(|s| [s.image, s.image_fallback])
            .chain(GALLERY.iter().flat_map(|g| [g.src, g.fallback]))
            .chain(BLOG_POSTS.iter().map(|p| p.image))
            .chain(TEAM.iter().map(|m| m.photo));
        for image in images {
            assert!(image.starts_with("/assets/"), "{} is outside /assets", image);
            let file = root.join(image.trim_start_matches('/'));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }
}
