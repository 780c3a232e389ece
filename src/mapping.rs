// @generated by extractmap from the discord client emoji catalog.
// Do not edit by hand, rerun `extractmap --path <asset.js>` instead.

pub(crate) static EMOJI_ENTRIES: &[(&str, &str)] = &[
	("soccer", "\u{26bd}"),
	("basketball", "\u{1f3c0}"),
	("football", "\u{1f3c8}"),
	("baseball", "\u{26be}"),
	("tennis", "\u{1f3be}"),
	("volleyball", "\u{1f3d0}"),
	("8ball", "\u{1f3b1}"),
	("ping_pong", "\u{1f3d3}"),
	("table_tennis", "\u{1f3d3}"),
	("trophy", "\u{1f3c6}"),
	("first_place", "\u{1f947}"),
	("first_place_medal", "\u{1f947}"),
	("medal", "\u{1f3c5}"),
	("sports_medal", "\u{1f3c5}"),
	("video_game", "\u{1f3ae}"),
	("game_die", "\u{1f3b2}"),
	("chess_pawn", "\u{265f}\u{fe0f}"),
	("dart", "\u{1f3af}"),
	("bowling", "\u{1f3b3}"),
	("guitar", "\u{1f3b8}"),
	("musical_keyboard", "\u{1f3b9}"),
	("microphone", "\u{1f3a4}"),
	("headphones", "\u{1f3a7}"),
	("art", "\u{1f3a8}"),
	("performing_arts", "\u{1f3ad}"),
	("tickets", "\u{1f39f}\u{fe0f}"),
	("admission_tickets", "\u{1f39f}\u{fe0f}"),
	("checkered_flag", "\u{1f3c1}"),
	("triangular_flag_on_post", "\u{1f6a9}"),
	("flag_black", "\u{1f3f4}"),
	("flag_white", "\u{1f3f3}\u{fe0f}"),
	("rainbow_flag", "\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}"),
	("gay_pride_flag", "\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}"),
	("pirate_flag", "\u{1f3f4}\u{200d}\u{2620}\u{fe0f}"),
	("flag_de", "\u{1f1e9}\u{1f1ea}"),
	("de", "\u{1f1e9}\u{1f1ea}"),
	("flag_fr", "\u{1f1eb}\u{1f1f7}"),
	("fr", "\u{1f1eb}\u{1f1f7}"),
	("flag_gb", "\u{1f1ec}\u{1f1e7}"),
	("gb", "\u{1f1ec}\u{1f1e7}"),
	("flag_jp", "\u{1f1ef}\u{1f1f5}"),
	("jp", "\u{1f1ef}\u{1f1f5}"),
	("flag_us", "\u{1f1fa}\u{1f1f8}"),
	("us", "\u{1f1fa}\u{1f1f8}"),
	("flag_ca", "\u{1f1e8}\u{1f1e6}"),
	("ca", "\u{1f1e8}\u{1f1e6}"),
	("flag_it", "\u{1f1ee}\u{1f1f9}"),
	("it", "\u{1f1ee}\u{1f1f9}"),
	("flag_es", "\u{1f1ea}\u{1f1f8}"),
	("es", "\u{1f1ea}\u{1f1f8}"),
	("green_apple", "\u{1f34f}"),
	("apple", "\u{1f34e}"),
	("pear", "\u{1f350}"),
	("tangerine", "\u{1f34a}"),
	("lemon", "\u{1f34b}"),
	("banana", "\u{1f34c}"),
	("watermelon", "\u{1f349}"),
	("grapes", "\u{1f347}"),
	("strawberry", "\u{1f353}"),
	("cherries", "\u{1f352}"),
	("peach", "\u{1f351}"),
	("pineapple", "\u{1f34d}"),
	("avocado", "\u{1f951}"),
	("eggplant", "\u{1f346}"),
	("carrot", "\u{1f955}"),
	("bread", "\u{1f35e}"),
	("cheese", "\u{1f9c0}"),
	("cheese_wedge", "\u{1f9c0}"),
	("egg", "\u{1f95a}"),
	("bacon", "\u{1f953}"),
	("hamburger", "\u{1f354}"),
	("fries", "\u{1f35f}"),
	("pizza", "\u{1f355}"),
	("hotdog", "\u{1f32d}"),
	("hot_dog", "\u{1f32d}"),
	("taco", "\u{1f32e}"),
	("sushi", "\u{1f363}"),
	("ramen", "\u{1f35c}"),
	("cake", "\u{1f370}"),
	("birthday", "\u{1f382}"),
	("cookie", "\u{1f36a}"),
	("doughnut", "\u{1f369}"),
	("coffee", "\u{2615}"),
	("tea", "\u{1f375}"),
	("beer", "\u{1f37a}"),
	("beers", "\u{1f37b}"),
	("wine_glass", "\u{1f377}"),
	("champagne", "\u{1f37e}"),
	("bottle_with_popping_cork", "\u{1f37e}"),
	("dog", "\u{1f436}"),
	("cat", "\u{1f431}"),
	("mouse", "\u{1f42d}"),
	("hamster", "\u{1f439}"),
	("rabbit", "\u{1f430}"),
	("fox", "\u{1f98a}"),
	("fox_face", "\u{1f98a}"),
	("bear", "\u{1f43b}"),
	("panda_face", "\u{1f43c}"),
	("koala", "\u{1f428}"),
	("tiger", "\u{1f42f}"),
	("lion_face", "\u{1f981}"),
	("lion", "\u{1f981}"),
	("cow", "\u{1f42e}"),
	("pig", "\u{1f437}"),
	("frog", "\u{1f438}"),
	("monkey_face", "\u{1f435}"),
	("see_no_evil", "\u{1f648}"),
	("hear_no_evil", "\u{1f649}"),
	("speak_no_evil", "\u{1f64a}"),
	("chicken", "\u{1f414}"),
	("penguin", "\u{1f427}"),
	("bird", "\u{1f426}"),
	("owl", "\u{1f989}"),
	("wolf", "\u{1f43a}"),
	("unicorn", "\u{1f984}"),
	("unicorn_face", "\u{1f984}"),
	("bee", "\u{1f41d}"),
	("bug", "\u{1f41b}"),
	("butterfly", "\u{1f98b}"),
	("snail", "\u{1f40c}"),
	("turtle", "\u{1f422}"),
	("snake", "\u{1f40d}"),
	("octopus", "\u{1f419}"),
	("crab", "\u{1f980}"),
	("fish", "\u{1f41f}"),
	("dolphin", "\u{1f42c}"),
	("whale", "\u{1f433}"),
	("shark", "\u{1f988}"),
	("cactus", "\u{1f335}"),
	("christmas_tree", "\u{1f384}"),
	("evergreen_tree", "\u{1f332}"),
	("seedling", "\u{1f331}"),
	("four_leaf_clover", "\u{1f340}"),
	("maple_leaf", "\u{1f341}"),
	("mushroom", "\u{1f344}"),
	("rose", "\u{1f339}"),
	("sunflower", "\u{1f33b}"),
	("sun_with_face", "\u{1f31e}"),
	("full_moon_with_face", "\u{1f31d}"),
	("crescent_moon", "\u{1f319}"),
	("star", "\u{2b50}"),
	("star2", "\u{1f31f}"),
	("sparkles", "\u{2728}"),
	("zap", "\u{26a1}"),
	("fire", "\u{1f525}"),
	("flame", "\u{1f525}"),
	("rainbow", "\u{1f308}"),
	("sunny", "\u{2600}\u{fe0f}"),
	("cloud", "\u{2601}\u{fe0f}"),
	("snowflake", "\u{2744}\u{fe0f}"),
	("snowman", "\u{2603}\u{fe0f}"),
	("droplet", "\u{1f4a7}"),
	("ocean", "\u{1f30a}"),
	("watch", "\u{231a}"),
	("iphone", "\u{1f4f1}"),
	("computer", "\u{1f4bb}"),
	("keyboard", "\u{2328}\u{fe0f}"),
	("desktop", "\u{1f5a5}\u{fe0f}"),
	("desktop_computer", "\u{1f5a5}\u{fe0f}"),
	("printer", "\u{1f5a8}\u{fe0f}"),
	("floppy_disk", "\u{1f4be}"),
	("cd", "\u{1f4bf}"),
	("camera", "\u{1f4f7}"),
	("tv", "\u{1f4fa}"),
	("telephone", "\u{260e}\u{fe0f}"),
	("hourglass", "\u{231b}"),
	("alarm_clock", "\u{23f0}"),
	("battery", "\u{1f50b}"),
	("bulb", "\u{1f4a1}"),
	("flashlight", "\u{1f526}"),
	("moneybag", "\u{1f4b0}"),
	("gem", "\u{1f48e}"),
	("wrench", "\u{1f527}"),
	("hammer", "\u{1f528}"),
	("tools", "\u{1f6e0}\u{fe0f}"),
	("hammer_and_wrench", "\u{1f6e0}\u{fe0f}"),
	("pick", "\u{26cf}\u{fe0f}"),
	("gear", "\u{2699}\u{fe0f}"),
	("bomb", "\u{1f4a3}"),
	("knife", "\u{1f52a}"),
	("shield", "\u{1f6e1}\u{fe0f}"),
	("crystal_ball", "\u{1f52e}"),
	("pill", "\u{1f48a}"),
	("key", "\u{1f511}"),
	("door", "\u{1f6aa}"),
	("gift", "\u{1f381}"),
	("balloon", "\u{1f388}"),
	("tada", "\u{1f389}"),
	("confetti_ball", "\u{1f38a}"),
	("envelope", "\u{2709}\u{fe0f}"),
	("package", "\u{1f4e6}"),
	("bookmark", "\u{1f516}"),
	("books", "\u{1f4da}"),
	("book", "\u{1f4d6}"),
	("newspaper", "\u{1f4f0}"),
	("paperclip", "\u{1f4ce}"),
	("scissors", "\u{2702}\u{fe0f}"),
	("pushpin", "\u{1f4cc}"),
	("pencil2", "\u{270f}\u{fe0f}"),
	("pencil", "\u{1f4dd}"),
	("lock", "\u{1f512}"),
	("unlock", "\u{1f513}"),
	("mag", "\u{1f50d}"),
	("grinning", "\u{1f600}"),
	("smiley", "\u{1f603}"),
	("smile", "\u{1f604}"),
	("grin", "\u{1f601}"),
	("laughing", "\u{1f606}"),
	("satisfied", "\u{1f606}"),
	("sweat_smile", "\u{1f605}"),
	("joy", "\u{1f602}"),
	("rofl", "\u{1f923}"),
	("rolling_on_the_floor_laughing", "\u{1f923}"),
	("relaxed", "\u{263a}\u{fe0f}"),
	("blush", "\u{1f60a}"),
	("innocent", "\u{1f607}"),
	("slight_smile", "\u{1f642}"),
	("slightly_smiling_face", "\u{1f642}"),
	("upside_down", "\u{1f643}"),
	("upside_down_face", "\u{1f643}"),
	("wink", "\u{1f609}"),
	("relieved", "\u{1f60c}"),
	("heart_eyes", "\u{1f60d}"),
	("kissing_heart", "\u{1f618}"),
	("yum", "\u{1f60b}"),
	("stuck_out_tongue", "\u{1f61b}"),
	("stuck_out_tongue_winking_eye", "\u{1f61c}"),
	("nerd", "\u{1f913}"),
	("nerd_face", "\u{1f913}"),
	("sunglasses", "\u{1f60e}"),
	("partying_face", "\u{1f973}"),
	("smirk", "\u{1f60f}"),
	("unamused", "\u{1f612}"),
	("disappointed", "\u{1f61e}"),
	("pensive", "\u{1f614}"),
	("worried", "\u{1f61f}"),
	("confused", "\u{1f615}"),
	("slight_frown", "\u{1f641}"),
	("slightly_frowning_face", "\u{1f641}"),
	("frowning2", "\u{2639}\u{fe0f}"),
	("white_frowning_face", "\u{2639}\u{fe0f}"),
	("persevere", "\u{1f623}"),
	("tired_face", "\u{1f62b}"),
	("weary", "\u{1f629}"),
	("pleading_face", "\u{1f97a}"),
	("cry", "\u{1f622}"),
	("sob", "\u{1f62d}"),
	("triumph", "\u{1f624}"),
	("angry", "\u{1f620}"),
	("rage", "\u{1f621}"),
	("exploding_head", "\u{1f92f}"),
	("flushed", "\u{1f633}"),
	("scream", "\u{1f631}"),
	("fearful", "\u{1f628}"),
	("sweat", "\u{1f613}"),
	("hugging", "\u{1f917}"),
	("hugging_face", "\u{1f917}"),
	("thinking", "\u{1f914}"),
	("thinking_face", "\u{1f914}"),
	("shushing_face", "\u{1f92b}"),
	("grimacing", "\u{1f62c}"),
	("rolling_eyes", "\u{1f644}"),
	("face_with_rolling_eyes", "\u{1f644}"),
	("sleeping", "\u{1f634}"),
	("drooling_face", "\u{1f924}"),
	("drool", "\u{1f924}"),
	("mask", "\u{1f637}"),
	("nauseated_face", "\u{1f922}"),
	("sick", "\u{1f922}"),
	("smiling_imp", "\u{1f608}"),
	("skull", "\u{1f480}"),
	("poop", "\u{1f4a9}"),
	("shit", "\u{1f4a9}"),
	("hankey", "\u{1f4a9}"),
	("poo", "\u{1f4a9}"),
	("clown", "\u{1f921}"),
	("clown_face", "\u{1f921}"),
	("ghost", "\u{1f47b}"),
	("alien", "\u{1f47d}"),
	("robot", "\u{1f916}"),
	("robot_face", "\u{1f916}"),
	("smiley_cat", "\u{1f63a}"),
	("heart_eyes_cat", "\u{1f63b}"),
	("raised_hands", "\u{1f64c}"),
	("raised_hands_tone1", "\u{1f64c}\u{1f3fb}"),
	("raised_hands_tone2", "\u{1f64c}\u{1f3fc}"),
	("raised_hands_tone3", "\u{1f64c}\u{1f3fd}"),
	("raised_hands_tone4", "\u{1f64c}\u{1f3fe}"),
	("raised_hands_tone5", "\u{1f64c}\u{1f3ff}"),
	("clap", "\u{1f44f}"),
	("clap_tone1", "\u{1f44f}\u{1f3fb}"),
	("clap_tone2", "\u{1f44f}\u{1f3fc}"),
	("clap_tone3", "\u{1f44f}\u{1f3fd}"),
	("clap_tone4", "\u{1f44f}\u{1f3fe}"),
	("clap_tone5", "\u{1f44f}\u{1f3ff}"),
	("wave", "\u{1f44b}"),
	("wave_tone1", "\u{1f44b}\u{1f3fb}"),
	("wave_tone2", "\u{1f44b}\u{1f3fc}"),
	("wave_tone3", "\u{1f44b}\u{1f3fd}"),
	("wave_tone4", "\u{1f44b}\u{1f3fe}"),
	("wave_tone5", "\u{1f44b}\u{1f3ff}"),
	("thumbsup", "\u{1f44d}"),
	("+1", "\u{1f44d}"),
	("thumbup", "\u{1f44d}"),
	("thumbsup_tone1", "\u{1f44d}\u{1f3fb}"),
	("+1_tone1", "\u{1f44d}\u{1f3fb}"),
	("thumbup_tone1", "\u{1f44d}\u{1f3fb}"),
	("thumbsup_tone2", "\u{1f44d}\u{1f3fc}"),
	("+1_tone2", "\u{1f44d}\u{1f3fc}"),
	("thumbup_tone2", "\u{1f44d}\u{1f3fc}"),
	("thumbsup_tone3", "\u{1f44d}\u{1f3fd}"),
	("+1_tone3", "\u{1f44d}\u{1f3fd}"),
	("thumbup_tone3", "\u{1f44d}\u{1f3fd}"),
	("thumbsup_tone4", "\u{1f44d}\u{1f3fe}"),
	("+1_tone4", "\u{1f44d}\u{1f3fe}"),
	("thumbup_tone4", "\u{1f44d}\u{1f3fe}"),
	("thumbsup_tone5", "\u{1f44d}\u{1f3ff}"),
	("+1_tone5", "\u{1f44d}\u{1f3ff}"),
	("thumbup_tone5", "\u{1f44d}\u{1f3ff}"),
	("thumbsdown", "\u{1f44e}"),
	("-1", "\u{1f44e}"),
	("thumbdown", "\u{1f44e}"),
	("thumbsdown_tone1", "\u{1f44e}\u{1f3fb}"),
	("-1_tone1", "\u{1f44e}\u{1f3fb}"),
	("thumbdown_tone1", "\u{1f44e}\u{1f3fb}"),
	("thumbsdown_tone2", "\u{1f44e}\u{1f3fc}"),
	("-1_tone2", "\u{1f44e}\u{1f3fc}"),
	("thumbdown_tone2", "\u{1f44e}\u{1f3fc}"),
	("thumbsdown_tone3", "\u{1f44e}\u{1f3fd}"),
	("-1_tone3", "\u{1f44e}\u{1f3fd}"),
	("thumbdown_tone3", "\u{1f44e}\u{1f3fd}"),
	("thumbsdown_tone4", "\u{1f44e}\u{1f3fe}"),
	("-1_tone4", "\u{1f44e}\u{1f3fe}"),
	("thumbdown_tone4", "\u{1f44e}\u{1f3fe}"),
	("thumbsdown_tone5", "\u{1f44e}\u{1f3ff}"),
	("-1_tone5", "\u{1f44e}\u{1f3ff}"),
	("thumbdown_tone5", "\u{1f44e}\u{1f3ff}"),
	("punch", "\u{1f44a}"),
	("punch_tone1", "\u{1f44a}\u{1f3fb}"),
	("punch_tone2", "\u{1f44a}\u{1f3fc}"),
	("punch_tone3", "\u{1f44a}\u{1f3fd}"),
	("punch_tone4", "\u{1f44a}\u{1f3fe}"),
	("punch_tone5", "\u{1f44a}\u{1f3ff}"),
	("fist", "\u{270a}"),
	("fist_tone1", "\u{270a}\u{1f3fb}"),
	("fist_tone2", "\u{270a}\u{1f3fc}"),
	("fist_tone3", "\u{270a}\u{1f3fd}"),
	("fist_tone4", "\u{270a}\u{1f3fe}"),
	("fist_tone5", "\u{270a}\u{1f3ff}"),
	("v", "\u{270c}\u{fe0f}"),
	("v_tone1", "\u{270c}\u{1f3fb}"),
	("v_tone2", "\u{270c}\u{1f3fc}"),
	("v_tone3", "\u{270c}\u{1f3fd}"),
	("v_tone4", "\u{270c}\u{1f3fe}"),
	("v_tone5", "\u{270c}\u{1f3ff}"),
	("ok_hand", "\u{1f44c}"),
	("ok_hand_tone1", "\u{1f44c}\u{1f3fb}"),
	("ok_hand_tone2", "\u{1f44c}\u{1f3fc}"),
	("ok_hand_tone3", "\u{1f44c}\u{1f3fd}"),
	("ok_hand_tone4", "\u{1f44c}\u{1f3fe}"),
	("ok_hand_tone5", "\u{1f44c}\u{1f3ff}"),
	("point_up", "\u{261d}\u{fe0f}"),
	("point_up_tone1", "\u{261d}\u{1f3fb}"),
	("point_up_tone2", "\u{261d}\u{1f3fc}"),
	("point_up_tone3", "\u{261d}\u{1f3fd}"),
	("point_up_tone4", "\u{261d}\u{1f3fe}"),
	("point_up_tone5", "\u{261d}\u{1f3ff}"),
	("pray", "\u{1f64f}"),
	("pray_tone1", "\u{1f64f}\u{1f3fb}"),
	("pray_tone2", "\u{1f64f}\u{1f3fc}"),
	("pray_tone3", "\u{1f64f}\u{1f3fd}"),
	("pray_tone4", "\u{1f64f}\u{1f3fe}"),
	("pray_tone5", "\u{1f64f}\u{1f3ff}"),
	("muscle", "\u{1f4aa}"),
	("muscle_tone1", "\u{1f4aa}\u{1f3fb}"),
	("muscle_tone2", "\u{1f4aa}\u{1f3fc}"),
	("muscle_tone3", "\u{1f4aa}\u{1f3fd}"),
	("muscle_tone4", "\u{1f4aa}\u{1f3fe}"),
	("muscle_tone5", "\u{1f4aa}\u{1f3ff}"),
	("eyes", "\u{1f440}"),
	("brain", "\u{1f9e0}"),
	("baby", "\u{1f476}"),
	("baby_tone1", "\u{1f476}\u{1f3fb}"),
	("baby_tone2", "\u{1f476}\u{1f3fc}"),
	("baby_tone3", "\u{1f476}\u{1f3fd}"),
	("baby_tone4", "\u{1f476}\u{1f3fe}"),
	("baby_tone5", "\u{1f476}\u{1f3ff}"),
	("man", "\u{1f468}"),
	("man_tone1", "\u{1f468}\u{1f3fb}"),
	("man_tone2", "\u{1f468}\u{1f3fc}"),
	("man_tone3", "\u{1f468}\u{1f3fd}"),
	("man_tone4", "\u{1f468}\u{1f3fe}"),
	("man_tone5", "\u{1f468}\u{1f3ff}"),
	("woman", "\u{1f469}"),
	("woman_tone1", "\u{1f469}\u{1f3fb}"),
	("woman_tone2", "\u{1f469}\u{1f3fc}"),
	("woman_tone3", "\u{1f469}\u{1f3fd}"),
	("woman_tone4", "\u{1f469}\u{1f3fe}"),
	("woman_tone5", "\u{1f469}\u{1f3ff}"),
	("man_technologist", "\u{1f468}\u{200d}\u{1f4bb}"),
	("man_technologist_tone1", "\u{1f468}\u{1f3fb}\u{200d}\u{1f4bb}"),
	("man_technologist_tone2", "\u{1f468}\u{1f3fc}\u{200d}\u{1f4bb}"),
	("man_technologist_tone3", "\u{1f468}\u{1f3fd}\u{200d}\u{1f4bb}"),
	("man_technologist_tone4", "\u{1f468}\u{1f3fe}\u{200d}\u{1f4bb}"),
	("man_technologist_tone5", "\u{1f468}\u{1f3ff}\u{200d}\u{1f4bb}"),
	("woman_technologist", "\u{1f469}\u{200d}\u{1f4bb}"),
	("woman_technologist_tone1", "\u{1f469}\u{1f3fb}\u{200d}\u{1f4bb}"),
	("woman_technologist_tone2", "\u{1f469}\u{1f3fc}\u{200d}\u{1f4bb}"),
	("woman_technologist_tone3", "\u{1f469}\u{1f3fd}\u{200d}\u{1f4bb}"),
	("woman_technologist_tone4", "\u{1f469}\u{1f3fe}\u{200d}\u{1f4bb}"),
	("woman_technologist_tone5", "\u{1f469}\u{1f3ff}\u{200d}\u{1f4bb}"),
	("family", "\u{1f46a}"),
	("family_man_woman_girl_boy", "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}\u{200d}\u{1f466}"),
	("family_mwgb", "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}\u{200d}\u{1f466}"),
	("couple_with_heart", "\u{1f491}"),
	("eye_in_speech_bubble", "\u{1f441}\u{fe0f}\u{200d}\u{1f5e8}\u{fe0f}"),
	("crown", "\u{1f451}"),
	("eyeglasses", "\u{1f453}"),
	("dark_sunglasses", "\u{1f576}\u{fe0f}"),
	("heart", "\u{2764}\u{fe0f}"),
	("orange_heart", "\u{1f9e1}"),
	("yellow_heart", "\u{1f49b}"),
	("green_heart", "\u{1f49a}"),
	("blue_heart", "\u{1f499}"),
	("purple_heart", "\u{1f49c}"),
	("black_heart", "\u{1f5a4}"),
	("broken_heart", "\u{1f494}"),
	("heart_exclamation", "\u{2763}\u{fe0f}"),
	("heavy_heart_exclamation_mark_ornament", "\u{2763}\u{fe0f}"),
	("two_hearts", "\u{1f495}"),
	("sparkling_heart", "\u{1f496}"),
	("peace", "\u{262e}\u{fe0f}"),
	("peace_symbol", "\u{262e}\u{fe0f}"),
	("yin_yang", "\u{262f}\u{fe0f}"),
	("100", "\u{1f4af}"),
	("anger", "\u{1f4a2}"),
	("boom", "\u{1f4a5}"),
	("zzz", "\u{1f4a4}"),
	("speech_balloon", "\u{1f4ac}"),
	("thought_balloon", "\u{1f4ad}"),
	("white_check_mark", "\u{2705}"),
	("heavy_check_mark", "\u{2714}\u{fe0f}"),
	("x", "\u{274c}"),
	("o", "\u{2b55}"),
	("no_entry", "\u{26d4}"),
	("warning", "\u{26a0}\u{fe0f}"),
	("question", "\u{2753}"),
	("exclamation", "\u{2757}"),
	("bangbang", "\u{203c}\u{fe0f}"),
	("interrobang", "\u{2049}\u{fe0f}"),
	("a", "\u{1f170}\u{fe0f}"),
	("b", "\u{1f171}\u{fe0f}"),
	("ab", "\u{1f18e}"),
	("cool", "\u{1f192}"),
	("new", "\u{1f195}"),
	("free", "\u{1f193}"),
	("ok", "\u{1f197}"),
	("sos", "\u{1f198}"),
	("up", "\u{1f199}"),
	("zero", "0\u{fe0f}\u{20e3}"),
	("one", "1\u{fe0f}\u{20e3}"),
	("two", "2\u{fe0f}\u{20e3}"),
	("hash", "#\u{fe0f}\u{20e3}"),
	("asterisk", "*\u{fe0f}\u{20e3}"),
	("keycap_asterisk", "*\u{fe0f}\u{20e3}"),
	("arrow_up", "\u{2b06}\u{fe0f}"),
	("arrow_down", "\u{2b07}\u{fe0f}"),
	("arrow_left", "\u{2b05}\u{fe0f}"),
	("arrow_right", "\u{27a1}\u{fe0f}"),
	("recycle", "\u{267b}\u{fe0f}"),
	("infinity", "\u{267e}\u{fe0f}"),
	("copyright", "\u{a9}\u{fe0f}"),
	("registered", "\u{ae}\u{fe0f}"),
	("tm", "\u{2122}\u{fe0f}"),
	("red_circle", "\u{1f534}"),
	("blue_circle", "\u{1f535}"),
	("musical_note", "\u{1f3b5}"),
	("notes", "\u{1f3b6}"),
	("red_car", "\u{1f697}"),
	("taxi", "\u{1f695}"),
	("bus", "\u{1f68c}"),
	("ambulance", "\u{1f691}"),
	("fire_engine", "\u{1f692}"),
	("bike", "\u{1f6b2}"),
	("motorcycle", "\u{1f3cd}\u{fe0f}"),
	("racing_motorcycle", "\u{1f3cd}\u{fe0f}"),
	("train", "\u{1f68b}"),
	("airplane", "\u{2708}\u{fe0f}"),
	("rocket", "\u{1f680}"),
	("helicopter", "\u{1f681}"),
	("sailboat", "\u{26f5}"),
	("ship", "\u{1f6a2}"),
	("anchor", "\u{2693}"),
	("construction", "\u{1f6a7}"),
	("fuelpump", "\u{26fd}"),
	("vertical_traffic_light", "\u{1f6a6}"),
	("map", "\u{1f5fa}\u{fe0f}"),
	("world_map", "\u{1f5fa}\u{fe0f}"),
	("statue_of_liberty", "\u{1f5fd}"),
	("tokyo_tower", "\u{1f5fc}"),
	("european_castle", "\u{1f3f0}"),
	("stadium", "\u{1f3df}\u{fe0f}"),
	("beach", "\u{1f3d6}\u{fe0f}"),
	("beach_with_umbrella", "\u{1f3d6}\u{fe0f}"),
	("mountain", "\u{26f0}\u{fe0f}"),
	("volcano", "\u{1f30b}"),
	("camping", "\u{1f3d5}\u{fe0f}"),
	("house", "\u{1f3e0}"),
	("office", "\u{1f3e2}"),
	("hospital", "\u{1f3e5}"),
	("church", "\u{26ea}"),
	("fireworks", "\u{1f386}"),
	("sunrise", "\u{1f305}"),
	("night_with_stars", "\u{1f303}"),
	("milky_way", "\u{1f30c}"),
	("bridge_at_night", "\u{1f309}"),
];
