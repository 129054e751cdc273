//! The shipped book: "A Taste of History", ten chapters of food history.

use super::{Document, Section, Variations};

fn paras(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Build the fixed sample document. Constructed fresh on every call; the
/// value is immutable by convention and owned by the caller.
pub fn sample_book() -> Document {
    Document {
        title: "A TASTE OF HISTORY".into(),
        subtitle: "The Stories Behind Famous Foods".into(),
        author: "Maryam M. Mahmoud".into(),
        introduction: paras(&[
            "Food is more than nourishment; it is a reflection of history, culture, and identity. This book explores the origins and cultural significance of traditional foods from different countries around the world.",
            "The objective of this book is to educate readers about the historical background and cultural importance of well-known dishes, while encouraging a deeper appreciation of global food traditions.",
            "Each section focuses on a specific country and its traditional food, providing information about its origin, historical development, cultural role, and global influence.",
        ]),
        cover_image: "A spice-colored global map made of grains and spices, classical oil painting style.".into(),
        sections: vec![
            Section {
                id: "um-ali".into(),
                title: "UM ALI".into(),
                country: "EGYPT".into(),
                image: "Professional documentary photography of an Egyptian cook presenting a steaming bowl of Om Ali in a traditional terracotta pot, served with coconut, raisins, and nuts.".into(),
                did_you_know: Some("Many traditional foods, including Um Ali, do not have a single documented inventor. Their histories are passed down through generations.".into()),
                history: paras(&[
                    "Um Ali is a very famous traditional Egyptian dessert resembling a bread pudding. The dessert's name translates to 'Mother of Ali' in Arabic.",
                    "The popularity behind it is associated with the Mamluk dynasty of the 13th century. It is linked to Um Ali, the first wife of Sultan Izz al-Din Aybak, in celebration of the death of Shajar al-Durr.",
                    "This dish remains a great representation of how food and history are closely linked through oral tradition.",
                ]),
                significance: paras(&[
                    "Um Ali is a very important part of Egyptian culture, strongly connected to celebrations like Ramadan.",
                    "It is linked to hospitality and is usually prepared warm for family gatherings where food represents generosity.",
                ]),
                variations: None,
                captions: paras(&[
                    "An Egyptian cook presents a steaming bowl of Om Ali in a traditional terracotta pot.",
                ]),
            },
            Section {
                id: "pizza-margherita".into(),
                title: "PIZZA MARGHERITA".into(),
                country: "ITALY".into(),
                image: "Cinematic close-up of a steaming hot Margherita pizza fresh from a traditional wood-fired brick oven, bright red tomato sauce, white mozzarella, and green basil.".into(),
                did_you_know: None,
                history: paras(&[
                    "Pizza Margherita originated in Naples, Italy and is one of the oldest, most popular types of pizza.",
                    "In 1889, a pizza maker called Raffaele Esposito prepared a pizza in honor of Queen Margherita, representing the colors of the Italian flag: red, white, and green.",
                    "It helped build pizza as a cultural symbol in Italy and eventually around the world.",
                ]),
                significance: paras(&[
                    "UNESCO recognized Neapolitan Pizza Making as part of the intangible cultural heritage in 2017.",
                    "It represents simplicity, quality ingredients, and traditional methods passed down through many generations.",
                ]),
                variations: Some(Variations {
                    title: "Regional Variations".into(),
                    content: paras(&[
                        "Neapolitan-style is soft and tender, focusing on regional ingredients like buffalo mozzarella.",
                        "Roman-style pizza is generally thinner and crispier, often sold by the slice.",
                    ]),
                }),
                captions: paras(&[
                    "A steaming hot Margherita pizza fresh from the traditional wood-fired brick oven.",
                ]),
            },
            Section {
                id: "croissant".into(),
                title: "CROISSANT".into(),
                country: "FRANCE".into(),
                image: "Professional chef serving a steaming, flaky golden-brown croissant in a Paris bistro, warm morning light.".into(),
                did_you_know: None,
                history: paras(&[
                    "The croissant is a light, flaky pastry made through lamination. While connected to France, it originates from the Austrian 'kipferl'.",
                    "French bakers refined the recipe in the 18th century using advanced techniques and high-quality butter.",
                    "By the 20th century, it became the quintessential symbol of French bakery culture.",
                ]),
                significance: paras(&[
                    "Croissants are an essential part of French daily life, typically paired with morning coffee.",
                    "The preparation requires immense precision and skill, highlighting the standards of French cuisine.",
                ]),
                variations: None,
                captions: paras(&["A chef serves a steaming croissant in a classic Paris bistro."]),
            },
            Section {
                id: "sushi".into(),
                title: "SUSHI".into(),
                country: "JAPAN".into(),
                image: "Japanese woman in a traditional kimono offering a ceramic platter of assorted fresh sushi, soft natural lighting.".into(),
                did_you_know: None,
                history: paras(&[
                    "Sushi began as 'narezushi', a method of preserving fish with fermented rice in Southeast Asia.",
                    "In the 19th century, 'Edomae sushi' was created in Tokyo as a quick fast food item for urban workers.",
                    "It evolved from a preservation technique into a highly refined culinary art form.",
                ]),
                significance: paras(&[
                    "Sushi represents Japanese values: simplicity, balance, and respect for seasonal ingredients.",
                    "Sushi masters (Shokunin) spend years training to master fish selection and rice seasoning.",
                ]),
                variations: Some(Variations {
                    title: "Modern Challenges".into(),
                    content: paras(&[
                        "Global popularity has led to concerns about overfishing, specifically for certain tuna stocks.",
                        "Sustainability guidebooks now help consumers choose options that support healthy ecosystems.",
                    ]),
                }),
                captions: paras(&[
                    "A platter of masterfully prepared sushi represents the balance of Japanese cuisine.",
                ]),
            },
            Section {
                id: "couscous".into(),
                title: "COUSCOUS".into(),
                country: "MOROCCO".into(),
                image: "Moroccan women gathering in a traditional kitchen to prepare a large platter of steaming couscous.".into(),
                did_you_know: None,
                history: paras(&[
                    "Couscous is a North African staple made from semolina, traditionally steamed multiple times for a fluffy texture.",
                    "Its history is tied to the Berber (Amazigh) people, with roots dating back to at least the 9th century.",
                    "It has transformed from a local product to a national symbol of Moroccan identity.",
                ]),
                significance: paras(&[
                    "Traditionally eaten on Fridays after midday prayers, it symbolizes family and community bonds.",
                    "UNESCO recognized couscous in 2020 as part of the Intangible Cultural Heritage of Humanity.",
                ]),
                variations: Some(Variations {
                    title: "Communal Traditions".into(),
                    content: paras(&[
                        "Preparation is often a communal effort involving multiple family members working together.",
                        "Serving couscous is a primary sign of hospitality and generosity in Moroccan culture.",
                    ]),
                }),
                captions: paras(&["Moroccan women prepare a communal platter of traditional couscous."]),
            },
            Section {
                id: "biryani".into(),
                title: "BIRYANI".into(),
                country: "INDIA".into(),
                image: "A woman in traditional Indian attire preparing a large copper pot of aromatic biryani with steam and spices.".into(),
                did_you_know: None,
                history: paras(&[
                    "Biryani consists of layers of fragrant basmati rice and meat, slow-cooked to combine flavors.",
                    "It evolved from Persian rice dishes brought to India by the Mughal Empire in the 16th century.",
                    "Traditionally prepared in royal kitchens, it remains associated with status and celebration.",
                ]),
                significance: paras(&[
                    "Biryani is the centerpiece of Indian weddings, festivals, and major family events.",
                    "Diverse regional styles exist, such as the spicy Hyderabadi and aromatic Lucknowi versions.",
                ]),
                variations: Some(Variations {
                    title: "The Mughal Influence".into(),
                    content: paras(&[
                        "The 'dum' (slow-steaming) method is a hallmark of authentic Mughal-style biryani.",
                        "Regional communities adopted these methods, blending them with local spices and ingredients.",
                    ]),
                }),
                captions: paras(&[
                    "A home kitchen scene showing the aromatic final touches of a traditional biryani.",
                ]),
            },
            Section {
                id: "hummus".into(),
                title: "HUMMUS".into(),
                country: "LEBANON".into(),
                image: "Close-up of a traditional bowl of Lebanese Hummus with olive oil, chickpeas, and pine nuts.".into(),
                did_you_know: None,
                history: paras(&[
                    "Hummus is a Middle Eastern dip made of chickpeas, tahini, lemon, and garlic.",
                    "While its origins are ancient, Lebanon is widely recognized for its deep cultural connection to the dish.",
                    "It is mentioned in medieval Arabic sources, showing its centuries-long presence in the region.",
                ]),
                significance: paras(&[
                    "It is an essential part of 'mezze', a style of dining focused on social interaction and sharing.",
                    "Offering hummus is a gesture of warmth and welcome in Lebanese culture.",
                ]),
                variations: None,
                captions: paras(&["A traditional bowl of Lebanese hummus prepared for a communal meal."]),
            },
            Section {
                id: "paella".into(),
                title: "PAELLA".into(),
                country: "SPAIN".into(),
                image: "Large seafood paella in a traditional wide pan, Valencian countryside background, steam rising.".into(),
                did_you_know: None,
                history: paras(&[
                    "Paella originated in the fields of Valencia, cooked outdoors by farmers over open fires.",
                    "The name comes from 'patella', the Latin word for a shallow pan.",
                    "Saffron is the key ingredient that provides its iconic golden color and earthy aroma.",
                ]),
                significance: paras(&[
                    "It is the ultimate communal meal in Spain, traditionally enjoyed with family on weekends.",
                    "It represents regional pride and has become a global icon of Spanish cuisine.",
                ]),
                variations: None,
                captions: paras(&[
                    "A traditional Valencian seafood paella represents the heart of Spanish shared dining.",
                ]),
            },
            Section {
                id: "tacos".into(),
                title: "TACOS".into(),
                country: "MEXICO".into(),
                image: "Mexican chef grilling meat for tacos in a vibrant street market, fresh tortillas and salsa.".into(),
                did_you_know: None,
                history: paras(&[
                    "Tacos originated in ancient Mexico; native peoples used corn tortillas as wraps long before colonization.",
                    "The word 'taco' originally referred to explosives used in 18th-century silver mines.",
                    "It is one of the oldest and most versatile food traditions in North America.",
                ]),
                significance: paras(&[
                    "Tacos are central to Mexican identity, enjoyed by everyone from street stalls to high-end tables.",
                    "They reflect geographic diversity through regional fillings like fish (Baja) or pork (Central).",
                ]),
                variations: None,
                captions: paras(&[
                    "An authentic street food scene showing the artisanal preparation of Mexican tacos.",
                ]),
            },
            Section {
                id: "dumplings".into(),
                title: "DUMPLINGS (JIAOZI)".into(),
                country: "CHINA".into(),
                image: "Chinese chefs hand-folding fresh jiaozi dumplings in a traditional kitchen with bamboo baskets.".into(),
                did_you_know: None,
                history: paras(&[
                    "Jiaozi are wheat-dough dumplings that have been part of Chinese cuisine for at least 1,800 years.",
                    "Legend attributes them to Zhang Zhongjing, a doctor who created them to cure frostbite.",
                    "They are traditionally shaped like ancient silver ingots to symbolize wealth.",
                ]),
                significance: paras(&[
                    "Making dumplings is a core family activity during the Chinese New Year, symbolizing unity.",
                    "The act of folding them together is as important as the meal itself for passing down traditions.",
                ]),
                variations: None,
                captions: paras(&[
                    "Skilled hands folding jiaozi dumplings, a tradition spanning nearly two millennia.",
                ]),
            },
        ],
        about_book: "This book explores the history and cultural significance of traditional foods from around the world. It shows how food reflects identity, tradition, and historical influence across different cultures.".into(),
        about_author: "Maryam Mohamed is an IB MYP 5 student with a strong interest in history and culture. This book is the result of her passion for exploring global traditions through food.".into(),
    }
}
