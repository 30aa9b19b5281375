//! Static word tables shared by the classifiers, the profiler and the tagger.
//!
//! Tables are plain `&[&str]` slices; membership sets are built lazily once per
//! process and only ever read afterwards.

use std::collections::HashSet;

use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// Part-of-speech tables
// ---------------------------------------------------------------------------

/// Common nouns. Checked first, so ambiguous entries resolve here.
pub(crate) const COMMON_NOUNS: &[&str] = &[
    "ability", "account", "achievement", "acting", "actor", "actress", "adventure", "affection",
    "afternoon", "agreement", "air", "airport", "allergy", "analysis", "anger", "ankle",
    "anniversary", "answer", "anxiety", "apartment", "app", "application", "approach", "apps",
    "area", "arena", "arm", "art", "ash", "assignment", "atlas", "attack", "attention", "attic",
    "audience", "back", "bacteria", "bag", "balcony", "band", "bank", "baseball", "basement",
    "basket", "basketball", "battery", "beach", "beat", "bed", "belief", "bicycle", "bill",
    "birthday", "blanket", "blog", "blood", "bluetooth", "boat", "body", "bone", "book", "bottle",
    "bottom", "bowl", "box", "boyfriend", "brain", "brake", "breath", "breeze", "bridge", "browser",
    "budget", "building", "bus", "business", "button", "cable", "cafe", "calculator", "calendar",
    "camera", "can", "cancer", "car", "career", "cart", "case", "cave", "ceiling", "celebration",
    "celebrity", "center", "ceremony", "chair", "chance", "change", "channel", "character", "cheek",
    "chest", "child", "chin", "choice", "chrome", "church", "cinema", "city", "class", "classroom",
    "cliff", "climbing", "clinic", "clock", "cloth", "clothes", "cloud", "coat", "code", "cold",
    "college", "comment", "community", "company", "compass", "competition", "computer",
    "concentration", "concept", "concert", "conflict", "confusion", "container", "content",
    "contract", "control", "cooking", "copper", "corner", "correction", "cost", "cough", "country",
    "couple", "course", "court", "creator", "credit", "cry", "cup", "cure", "curiosity", "cycling",
    "dancing", "danger", "data", "database", "date", "day", "debt", "decision", "defense",
    "definition", "depression", "desert", "desk", "destination", "development", "device",
    "diabetes", "dictionary", "direction", "director", "dirt", "discord", "discount", "discovery",
    "disease", "dishwasher", "distance", "divorce", "doctor", "document", "door", "doubt",
    "download", "drawing", "dream", "dress", "drug", "drum", "dust", "ear", "earring", "earth",
    "earthquake", "east", "echo", "edge", "education", "elbow", "electricity", "email", "emotion",
    "encyclopedia", "end", "energy", "engine", "enthusiasm", "entrance", "eraser", "error",
    "evening", "exam", "example", "excitement", "exercise", "exit", "expense", "experience",
    "experiment", "explanation", "eye", "eyebrow", "eyelash", "fabric", "face", "facebook", "fact",
    "factory", "failure", "faith", "fame", "family", "fan", "father", "fatigue", "faucet", "fear",
    "feeling", "fence", "festival", "fever", "field", "file", "film", "finger", "fire", "firefox",
    "fitness", "flame", "floor", "flu", "focus", "folder", "follow", "food", "foot", "football",
    "force", "forehead", "forest", "freezer", "friend", "friendship", "front", "frustration",
    "fuel", "fun", "game", "gaming", "garage", "garden", "gas", "gate", "gear", "gift", "girl",
    "girlfriend", "glass", "globe", "goal", "god", "gold", "golf", "google", "government", "grade",
    "ground", "group", "guide", "guitar", "guy", "gym", "hair", "hammer", "hand", "happiness",
    "hardware", "harmony", "hat", "head", "headache", "healing", "health", "heart", "heel",
    "height", "helicopter", "highway", "hiking", "hill", "hip", "history", "holiday", "home",
    "homework", "hope", "horror", "hospital", "hotel", "hour", "house", "hug", "husband", "ice",
    "idea", "illness", "image", "improvement", "income", "infection", "influencer", "information",
    "ingredient", "injection", "injury", "innovation", "inside", "insomnia", "instagram",
    "instruction", "instrument", "insurance", "intelligence", "interest", "internet", "invention",
    "investigation", "investment", "iron", "island", "issue", "jacket", "jar", "jewelry", "job",
    "journey", "joy", "jungle", "keyboard", "kid", "kind", "kiss", "kitchen", "knee", "knife",
    "knowledge", "lake", "lamp", "laptop", "laugh", "law", "learning", "leather", "left", "leg",
    "length", "lesson", "level", "library", "life", "lightning", "like", "line", "link", "lip",
    "loan", "location", "login", "lot", "love", "luggage", "machine", "magazine", "makeup", "mall",
    "man", "manual", "map", "marathon", "market", "marriage", "media", "medicine", "melody",
    "member", "memory", "message", "metal", "method", "microphone", "microwave", "mind", "minute",
    "mirror", "misinformation", "mistake", "moment", "money", "month", "moon", "morning", "mosque",
    "mother", "motor", "motorcycle", "mountain", "mouse", "movie", "mud", "mug", "muscle", "museum",
    "music", "nail", "name", "neck", "necklace", "network", "news", "newspaper", "night", "noise",
    "north", "nose", "novel", "number", "nurse", "observation", "occupation", "ocean", "office",
    "oil", "operation", "opportunity", "option", "others", "outside", "oven", "package", "pain",
    "painting", "palm", "pants", "paper", "parent", "park", "part", "partner", "party", "passion",
    "passport", "password", "path", "peace", "pen", "pencil", "people", "performance", "perfume",
    "person", "pharmacy", "phone", "photo", "piano", "pill", "pillow", "place", "plan", "plane",
    "planet", "plastic", "plate", "platform", "player", "playground", "pleasure", "podcast", "poem",
    "point", "pool", "popularity", "position", "possibility", "post", "power", "practice", "prayer",
    "present", "president", "price", "prize", "probability", "problem", "producer", "profession",
    "profile", "program", "progress", "project", "promise", "protection", "purchase", "quality",
    "quantity", "question", "race", "radio", "rage", "rain", "rainbow", "ranking", "reading",
    "reason", "receipt", "recipe", "recovery", "reddit", "refrigerator", "relationship", "religion",
    "remote", "reputation", "research", "restaurant", "result", "reward", "rhythm", "right", "ring",
    "risk", "river", "road", "rock", "rocket", "room", "route", "rubber", "ruler", "running",
    "sadness", "safari", "safety", "salary", "sale", "sand", "satellite", "savings", "scene",
    "school", "scissors", "score", "scream", "screen", "screwdriver", "script", "sea", "search",
    "security", "sense", "server", "service", "shampoo", "share", "ship", "shirt", "shock", "shoes",
    "shop", "shoulder", "shout", "show", "sickness", "side", "sight", "silence", "silver",
    "singing", "sink", "size", "skiing", "skill", "skin", "sky", "skype", "smartphone", "smell",
    "smile", "smoke", "snapchat", "sneeze", "snow", "soap", "social", "sofa", "software",
    "solution", "song", "soul", "sound", "south", "space", "speed", "spirit", "sport", "spouse",
    "stadium", "stage", "star", "state", "station", "steel", "stomach", "stone", "store", "storm",
    "story", "stove", "strategy", "stream", "street", "strength", "stress", "student", "study",
    "studying", "subject", "subscriber", "success", "sun", "surface", "surfing", "surgery",
    "surprise", "swimming", "switch", "system", "table", "tablet", "talent", "taste", "tax",
    "teacher", "teaching", "team", "tear", "technique", "technology", "television", "temple",
    "tennis", "terror", "test", "text", "textbook", "theater", "theory", "therapy", "thing",
    "thought", "thumb", "thunder", "ticket", "tiktok", "time", "tire", "today", "toe", "tomorrow",
    "tone", "tongue", "tool", "tooth", "toothbrush", "toothpaste", "top", "touch", "tournament",
    "towel", "track", "traffic", "train", "training", "travel", "treatment", "trend", "trip",
    "truck", "trust", "truth", "tunnel", "twitter", "understanding", "university", "upload", "url",
    "user", "username", "vacation", "valley", "value", "van", "video", "violin", "virus", "voice",
    "volcano", "volume", "waist", "wall", "war", "warehouse", "watch", "water", "way", "weakness",
    "website", "wedding", "week", "weekend", "weight", "west", "whatsapp", "wheel", "whisper",
    "width", "wife", "wifi", "wind", "window", "wire", "wisdom", "wish", "woman", "wood", "word",
    "work", "workout", "world", "worry", "wound", "wrist", "writing", "yard", "yesterday",
    "youtube", "zoom",
];

/// Common verbs (base forms plus the auxiliaries).
pub(crate) const COMMON_VERBS: &[&str] = &[
    "accept", "accompany", "accuse", "acknowledge", "acquire", "adapt", "add", "adjust", "admire",
    "advance", "affect", "afford", "agree", "allow", "amaze", "amuse", "announce", "annoy",
    "apologize", "appear", "apply", "appreciate", "approve", "are", "argue", "arrange", "arrive",
    "ask", "assess", "assist", "assume", "assure", "astonish", "attempt", "attract", "balance",
    "be", "become", "been", "being", "believe", "belong", "bend", "blame", "bore", "born", "borrow",
    "bother", "bounce", "break", "bring", "broadcast", "build", "buy", "calculate", "call", "calm",
    "care", "carry", "catch", "categorize", "cause", "celebrate", "charge", "chat", "cheat",
    "check", "choose", "circle", "cite", "classify", "clean", "climb", "collaborate", "collect",
    "combine", "come", "comfort", "command", "communicate", "compare", "compete", "compliment",
    "comprehend", "concentrate", "concern", "confirm", "confuse", "congratulate", "connect",
    "conserve", "consider", "contain", "continue", "contrast", "contribute", "convert", "convince",
    "cook", "cooperate", "coordinate", "copy", "could", "count", "cover", "create", "criticize",
    "cut", "damage", "dance", "decay", "deceive", "decide", "declare", "decrease", "defend",
    "define", "delight", "deliver", "demand", "demonstrate", "deny", "descend", "describe",
    "design", "desire", "destroy", "deteriorate", "determine", "develop", "did", "die",
    "disappoint", "discern", "discipline", "discover", "discuss", "disgust", "dislike",
    "distribute", "disturb", "divide", "do", "does", "donate", "drag", "drain", "draw", "drift",
    "drill", "drink", "drive", "drop", "duplicate", "earn", "eat", "effort", "emphasize", "employ",
    "empower", "encounter", "encourage", "endure", "energize", "engage", "enjoy", "enter",
    "entertain", "envy", "escape", "estimate", "evaluate", "examine", "excite", "exclude", "excuse",
    "execute", "exhaust", "exist", "expand", "expect", "explain", "explore", "fail", "fall",
    "fascinate", "feel", "fight", "find", "fix", "flatter", "flip", "float", "forbid", "forecast",
    "forget", "forgive", "frighten", "function", "gain", "gather", "get", "give", "go", "grab",
    "graduate", "grieve", "grow", "guarantee", "guess", "had", "happen", "harm", "has", "hate",
    "have", "having", "heal", "hear", "help", "hide", "highlight", "hire", "hit", "hold", "honor",
    "hop", "hurt", "identify", "illustrate", "imagine", "imitate", "impact", "implement", "imply",
    "impress", "improve", "include", "increase", "indicate", "influence", "inform", "injure",
    "inspect", "inspire", "insult", "integrate", "interact", "interpret", "interrupt", "invent",
    "invert", "invest", "investigate", "involve", "irritate", "is", "join", "judge", "jump",
    "justify", "kick", "kill", "know", "labor", "lack", "lead", "lean", "leap", "learn", "lease",
    "leave", "lend", "lie", "lift", "listen", "live", "lose", "lower", "mail", "maintain", "make",
    "manage", "march", "marry", "matter", "may", "mean", "measure", "meet", "mention", "might",
    "miss", "modify", "monitor", "motivate", "mourn", "move", "must", "need", "notice", "observe",
    "obtain", "offend", "offer", "open", "operate", "order", "organize", "owe", "own", "paint",
    "pardon", "participate", "pass", "pay", "perform", "permit", "persuade", "play", "please",
    "possess", "praise", "predict", "prefer", "prepare", "preserve", "press", "prevent", "print",
    "proceed", "produce", "prosecute", "protect", "prove", "provide", "publish", "pull", "punch",
    "punish", "push", "quote", "raise", "rank", "rate", "reach", "read", "realize", "receive",
    "recognize", "record", "recover", "recreate", "reduce", "refer", "refresh", "refuse", "regret",
    "rehearse", "reject", "relate", "relax", "remain", "remember", "renew", "rent", "repair",
    "repeat", "repel", "report", "represent", "reproduce", "request", "require", "rescue",
    "resolve", "respect", "rest", "restore", "retire", "return", "reverse", "revitalize", "revive",
    "revolt", "ride", "rise", "rob", "roll", "rotate", "ruin", "run", "satisfy", "save", "scare",
    "schedule", "scold", "see", "seek", "seem", "select", "sell", "send", "separate", "serve",
    "set", "shift", "should", "sing", "sit", "skip", "sleep", "slide", "slip", "solve", "sort",
    "speak", "spend", "spin", "spoil", "spring", "squeeze", "stand", "stay", "steal", "stimulate",
    "stop", "strengthen", "stretch", "stroll", "struggle", "stumble", "succeed", "suffer",
    "suggest", "supervise", "supply", "support", "suppose", "surround", "survive", "swim",
    "symbolize", "take", "teach", "tell", "thank", "think", "threaten", "thrill", "throw", "tip",
    "toil", "transfer", "transform", "transport", "treat", "try", "turn", "twist", "type",
    "understand", "unite", "upset", "use", "verify", "visit", "volunteer", "wait", "wake", "walk",
    "wander", "want", "warn", "was", "wash", "waste", "wave", "weaken", "weigh", "were", "will",
    "win", "wonder", "worsen", "would", "write",
];

/// Common adjectives.
pub(crate) const COMMON_ADJECTIVES: &[&str] = &[
    "abundant", "accidental", "accomplished", "active", "actual", "advanced", "aggressive", "alert",
    "alien", "alternative", "amazing", "amusing", "ancient", "animal", "apparent", "artificial",
    "authentic", "automatic", "available", "average", "aware", "awesome", "awful", "bad",
    "balanced", "basic", "beautiful", "beloved", "beneficial", "best", "better", "big", "bitter",
    "blessed", "blunt", "boring", "brief", "bright", "brilliant", "broad", "busy", "casual",
    "central", "certain", "changing", "cheap", "cheerful", "classic", "clear", "clever", "close",
    "closed", "collective", "comfortable", "common", "complete", "complex", "concentrated",
    "confident", "connected", "conscious", "conservative", "consistent", "constant", "constantly",
    "contemporary", "continuous", "convenient", "conventional", "cool", "cooperative", "creative",
    "current", "curved", "dangerous", "dark", "decreased", "deep", "delayed", "deliberate",
    "delicate", "dense", "different", "difficult", "digital", "dim", "dirty", "disgusting",
    "distant", "distinct", "diverse", "domestic", "dry", "dull", "dynamic", "early", "eastern",
    "easy", "effective", "efficient", "elastic", "electronic", "elegant", "empty", "energetic",
    "enjoyable", "enormous", "equal", "essential", "eternal", "ethical", "even", "excellent",
    "exceptional", "excited", "exciting", "expensive", "experienced", "exposed", "extended",
    "external", "extraordinary", "extreme", "fair", "fake", "false", "familiar", "famous",
    "fantastic", "far", "fashionable", "fast", "favorite", "festive", "few", "fine", "finished",
    "firm", "first", "fixed", "flat", "flexible", "focused", "forceful", "foreign", "formal",
    "former", "fortunate", "fragile", "free", "frequent", "fresh", "friendly", "full", "funny",
    "future", "general", "gentle", "genuine", "global", "good", "gradual", "grave", "great",
    "guilty", "happy", "hard", "harsh", "healthy", "heavy", "helpful", "hidden", "high", "higher",
    "historical", "holy", "honest", "hopeful", "horrible", "hot", "huge", "human", "humid",
    "humorous", "immediate", "important", "impossible", "increased", "independent", "individual",
    "ineffective", "inferior", "infinite", "innocent", "innovative", "instant", "intelligent",
    "intense", "intentional", "interesting", "internal", "international", "joyful", "known",
    "large", "last", "late", "latest", "lazy", "leading", "least", "legal", "less", "liberal",
    "light", "limited", "liquid", "little", "local", "logical", "long", "loose", "loud", "loved",
    "low", "loyal", "lucky", "magnificent", "main", "major", "many", "massive", "mature",
    "meaningful", "merry", "mighty", "mild", "miniature", "minor", "mixed", "mobile", "moderate",
    "modern", "moist", "moral", "more", "most", "moving", "much", "multiple", "narrow", "national",
    "native", "natural", "near", "neat", "necessary", "negative", "nervous", "new", "next", "nice",
    "normal", "northern", "obvious", "official", "old", "optimistic", "optional", "ordinary",
    "organized", "original", "outstanding", "partial", "particular", "passive", "past", "peaceful",
    "perfect", "permanent", "personal", "pessimistic", "planned", "pleasant", "pleased", "poor",
    "popular", "positive", "possible", "powerful", "practical", "precious", "previous", "primary",
    "private", "productive", "professional", "progressive", "prompt", "public", "pure", "quick",
    "quiet", "rapid", "rare", "rational", "real", "realistic", "reasonable", "recent", "regular",
    "related", "relaxed", "relevant", "reliable", "required", "respected", "responsible",
    "revolutionary", "rich", "rigid", "robust", "rough", "round", "rural", "rushed", "sacred",
    "sad", "safe", "salty", "same", "satisfied", "secret", "sensible", "serious", "severe", "sharp",
    "shiny", "short", "sick", "significant", "silent", "similar", "simple", "single", "skilled",
    "slow", "small", "smart", "smooth", "soft", "solemn", "solid", "sour", "southern", "special",
    "specific", "spicy", "spoken", "spontaneous", "square", "stable", "standard", "steady", "steep",
    "straight", "strange", "stressed", "strong", "sturdy", "stylish", "successful", "sudden",
    "superb", "superior", "sweet", "talented", "tall", "temporary", "tense", "terrible", "thick",
    "thin", "thrilling", "tight", "timely", "tiny", "tired", "total", "tough", "traditional",
    "trendy", "true", "typical", "uncertain", "unclear", "uniform", "unique", "unlimited",
    "upcoming", "upper", "urban", "urgent", "useful", "useless", "valuable", "variable",
    "victorious", "vintage", "violent", "virtual", "virtuous", "visible", "vocal", "voluntary",
    "warm", "weak", "wealthy", "weird", "western", "wet", "whole", "wide", "winning", "wise",
    "wonderful", "worse", "worst", "worthless", "written", "wrong", "young",
];

/// Common adverbs.
pub(crate) const COMMON_ADVERBS: &[&str] = &[
    "abnormally", "about", "above", "absolutely", "academically", "accidentally", "accurately",
    "across", "actually", "affirmatively", "again", "agriculturally", "ahead", "all", "almost",
    "alone", "alongside", "also", "always", "amateurishly", "amazingly", "annoyingly", "anxiously",
    "any", "anybody", "anyone", "anything", "anywhere", "apart", "apparently", "approximately",
    "around", "artificially", "artistically", "attractively", "atypically", "automatically", "away",
    "awfully", "awkwardly", "backward", "backwards", "badly", "barely", "basically", "beautifully",
    "before", "behind", "below", "beneath", "beyond", "boldly", "both", "bravely", "briefly",
    "brilliantly", "calmly", "carefully", "carelessly", "casually", "certainly", "chiefly",
    "cleanly", "clearly", "cleverly", "clumsily", "collectively", "commercially", "commonly",
    "completely", "confidently", "confusingly", "consciously", "consistently", "continually",
    "continuously", "conventionally", "courageously", "creatively", "culturally", "currently",
    "dangerously", "decreasingly", "definitely", "deliberately", "dependably", "digitally",
    "directly", "dirtily", "disappointingly", "discontinuously", "disorderly", "doubtfully", "down",
    "downward", "downwards", "each", "earlier", "easily", "economically", "educationally",
    "effectively", "either", "electronically", "elegantly", "emotionally", "enough", "entirely",
    "especially", "essentially", "ethically", "every", "everybody", "everyone", "everything",
    "everywhere", "evidently", "exactly", "expectedly", "expertly", "extremely", "fairly", "faster",
    "fearfully", "fearlessly", "finally", "financially", "firmly", "foolishly", "forcefully",
    "forever", "formally", "formerly", "fortunately", "forward", "frankly", "frequently",
    "frustratingly", "fundamentally", "generally", "gently", "genuinely", "gladly", "gracefully",
    "gradually", "greatly", "guiltily", "half", "happily", "hardly", "harshly", "here", "highly",
    "historically", "honestly", "hopefully", "horribly", "how", "however", "humbly", "illegally",
    "immediately", "immorally", "importantly", "impurely", "inaccurately", "inconstantly",
    "incorrectly", "increasingly", "incredibly", "indirectly", "individually", "industrially",
    "inexpertly", "informally", "innocently", "innovatively", "instantly", "intellectually",
    "intelligently", "intentionally", "interestingly", "intermittently", "involuntarily", "inward",
    "inwards", "irregularly", "irritatingly", "jointly", "jokingly", "just", "largely", "lately",
    "later", "legally", "likely", "literally", "logically", "loosely", "loudly", "luckily",
    "mainly", "manually", "maybe", "mechanically", "medically", "mentally", "messily", "mightily",
    "militarily", "mistakenly", "modestly", "momentarily", "morally", "mostly", "naturally",
    "nearby", "nearly", "neatly", "negatively", "neither", "nervously", "never", "nicely", "no",
    "nobody", "none", "normally", "not", "nothing", "now", "nowhere", "obviously", "occasionally",
    "off", "officially", "often", "once", "only", "openly", "orderly", "originally", "out",
    "outward", "outwards", "over", "partially", "particularly", "partly", "peacefully", "perfectly",
    "perhaps", "periodically", "permanently", "persistently", "personally", "physically",
    "playfully", "pleasantly", "pleasingly", "politically", "poorly", "positively", "possibly",
    "powerfully", "practically", "precisely", "predictably", "presently", "pretty", "previously",
    "primarily", "privately", "probably", "professionally", "progressively", "proudly", "publicly",
    "purely", "purposely", "quarter", "quicker", "quickly", "quietly", "quite", "randomly",
    "rapidly", "rarely", "rather", "rationally", "really", "reasonably", "recently", "regularly",
    "reliably", "religiously", "repeatedly", "righteously", "roughly", "sadly", "safely",
    "satisfyingly", "scarcely", "scientifically", "secretly", "securely", "seldom", "sensibly",
    "separately", "seriously", "several", "shockingly", "shyly", "sideways", "silently", "simply",
    "sincerely", "sinfully", "skillfully", "slightly", "slower", "slowly", "smoothly", "so",
    "socially", "softly", "some", "somebody", "someone", "something", "sometimes", "somewhat",
    "somewhere", "sooner", "specifically", "speedily", "spiritually", "sporadically", "steadily",
    "still", "strongly", "stupidly", "successfully", "suddenly", "surely", "surprisingly",
    "swiftly", "systematically", "technically", "temporarily", "terribly", "then", "theoretically",
    "there", "thrice", "through", "throughout", "tidily", "tightly", "timidly", "together",
    "tonight", "too", "totally", "traditionally", "truly", "truthfully", "twice", "typically",
    "unbelievably", "uncertainly", "uncommonly", "unconsciously", "unconventionally",
    "undependably", "under", "undoubtedly", "unethically", "unexpectedly", "unfortunately",
    "unlikely", "unluckily", "unofficially", "unpredictably", "unreliably", "unsurprisingly",
    "untidily", "unusually", "unwillingly", "up", "upward", "upwards", "usually", "very",
    "violently", "virtually", "virtuously", "voluntarily", "weakly", "well", "where", "wherever",
    "wholly", "why", "wickedly", "willingly", "wisely", "within", "without", "wonderfully",
    "wrongly", "yes",
];

/// Pronouns, determiners, prepositions and conjunctions.
pub(crate) const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours", "hers",
    "ours", "theirs", "who", "whom", "whose", "which", "what", "of", "in", "on", "at", "to", "for",
    "with", "by", "from", "into", "onto", "upon", "against", "among", "between", "during", "toward",
    "towards", "until", "via", "per", "than", "as", "and", "or", "but", "nor", "yet", "if",
    "because", "although", "though", "whereas", "unless", "while", "since", "whether", "when",
    "whenever", "after",
];

// ---------------------------------------------------------------------------
// Academic catalogue
// ---------------------------------------------------------------------------

/// Named sub-lists of the academic keyword catalogue.
pub(crate) const ACADEMIC_CATALOGUE: &[(&str, &[&str])] = &[
    (
        "academic",
        &[
            "analyze", "synthesize", "evaluate", "critique", "demonstrate", "illustrate",
            "establish", "determine", "investigate", "examine", "significant", "substantial",
            "comprehensive", "fundamental", "crucial",
        ],
    ),
    (
        "descriptive",
        &[
            "magnificent", "extraordinary", "remarkable", "exceptional", "profound", "intricate",
            "sophisticated", "elaborate", "vivid", "compelling", "fascinating", "intriguing",
            "captivating",
        ],
    ),
    (
        "transitions",
        &[
            "furthermore", "consequently", "nevertheless", "moreover", "therefore", "however",
            "subsequently", "additionally", "ultimately", "specifically", "particularly",
            "essentially", "significantly",
        ],
    ),
    (
        "advanced_verbs",
        &[
            "enhance", "facilitate", "demonstrate", "implement", "establish", "contribute",
            "emphasize", "illustrate", "represent", "indicate", "reflect", "reveal", "suggest",
            "imply", "encompass",
        ],
    ),
];

// ---------------------------------------------------------------------------
// Connectors
// ---------------------------------------------------------------------------

/// Subordinating and contrastive connectors counted by the complexity ratio.
pub(crate) const COMPLEXITY_CONNECTORS: &[&str] = &[
    "however", "therefore", "furthermore", "although", "because", "since", "while", "whereas",
    "unless", "though",
];

/// Discourse markers counted by the coherence analyzer.
pub(crate) const LOGICAL_CONNECTORS: &[&str] = &[
    "however", "therefore", "furthermore", "moreover", "consequently", "nevertheless",
    "additionally", "specifically", "ultimately", "initially", "firstly", "secondly", "finally",
    "in conclusion", "for example", "such as",
];

/// Plain transition words counted by the coherence analyzer.
pub(crate) const TRANSITION_WORDS: &[&str] = &[
    "but", "and", "or", "so", "because", "since", "while", "although", "unless", "before", "after",
    "when", "if", "thus", "hence",
];

// ---------------------------------------------------------------------------
// Tagger tables
// ---------------------------------------------------------------------------

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours", "hers", "ours",
    "theirs", "who", "whom", "someone", "somebody", "everyone", "everybody", "anyone", "nobody",
];

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "every", "each", "no", "another", "either", "neither",
];

pub(crate) const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "to", "for", "with", "by", "from", "into", "onto", "upon", "about",
    "against", "among", "between", "during", "toward", "towards", "until", "via", "per", "over",
    "under", "through", "after", "before", "behind", "beside", "near", "without", "within",
];

pub(crate) const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "if", "because", "although", "though", "whereas",
    "unless", "while", "since", "whether", "when", "whenever", "than",
];

pub(crate) const MODALS: &[&str] = &[
    "will", "would", "can", "could", "shall", "should", "may", "might", "must",
];

/// Present-tense forms of `be`, `have` and `do`.
pub(crate) const AUXILIARY_PRESENT: &[&str] = &["am", "is", "are", "has", "have", "do", "does"];

/// Past-tense forms of `be`, `have` and `do`.
pub(crate) const AUXILIARY_PAST: &[&str] = &["was", "were", "had", "did"];

pub(crate) const IRREGULAR_PAST: &[&str] = &[
    "went", "saw", "came", "took", "made", "said", "got", "gave", "found", "thought", "told",
    "became", "left", "felt", "brought", "began", "kept", "held", "wrote", "stood", "heard",
    "meant", "met", "ran", "paid", "sat", "spoke", "led", "grew", "lost", "fell", "sent", "built",
    "understood", "drew", "broke", "spent", "ate", "drank", "slept", "won", "bought", "taught",
    "caught", "fought", "knew", "flew", "chose", "forgot", "rode", "sang", "swam", "threw",
    "wore", "drove", "woke", "hid", "shook", "sold", "stole", "struck", "swore", "tore",
];

pub(crate) const IRREGULAR_PARTICIPLES: &[&str] = &[
    "been", "done", "gone", "seen", "taken", "given", "written", "eaten", "spoken", "known",
    "chosen", "driven", "broken", "forgotten", "flown", "grown", "drawn", "shown", "thrown",
    "worn", "ridden", "stolen", "sung", "swum", "begun",
];

// ---------------------------------------------------------------------------
// Membership sets
// ---------------------------------------------------------------------------

fn set_of(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

pub(crate) static NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(COMMON_NOUNS));
pub(crate) static VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(COMMON_VERBS));
pub(crate) static ADJECTIVES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set_of(COMMON_ADJECTIVES));
pub(crate) static ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(COMMON_ADVERBS));
pub(crate) static FUNCTION: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(FUNCTION_WORDS));

/// Every word in any academic sub-list.
pub(crate) static ACADEMIC: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ACADEMIC_CATALOGUE
        .iter()
        .flat_map(|(_, words)| words.iter().copied())
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_tables_are_disjoint() {
        let tables = [&*NOUNS, &*VERBS, &*ADJECTIVES, &*ADVERBS, &*FUNCTION];
        for (i, a) in tables.iter().enumerate() {
            for b in tables.iter().skip(i + 1) {
                let shared: Vec<_> = a.intersection(b).collect();
                assert!(shared.is_empty(), "overlap: {shared:?}");
            }
        }
    }

    #[test]
    fn content_tables_hold_several_hundred_entries() {
        for table in [COMMON_NOUNS, COMMON_VERBS, COMMON_ADJECTIVES, COMMON_ADVERBS] {
            assert!(table.len() >= 300, "only {} entries", table.len());
        }
    }

    #[test]
    fn academic_catalogue_has_four_sub_lists() {
        let names: Vec<&str> = ACADEMIC_CATALOGUE.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["academic", "descriptive", "transitions", "advanced_verbs"]
        );
        assert!(ACADEMIC.contains("furthermore"));
        assert!(ACADEMIC.contains("demonstrate"));
    }
}
