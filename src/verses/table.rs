// Static Fighter Verses schedule.
// Five sets of 52 weekly entries, indexed 0..260 in schedule order.

use super::VerseReference;

/// Number of weeks in one set of the schedule.
pub const WEEKS_PER_SET: u32 = 52;

/// Number of sets in the schedule.
pub const SETS: u32 = 5;

/// Total entries in the schedule.
pub const VERSE_COUNT: u32 = WEEKS_PER_SET * SETS;

/// Every Fighter Verse, in schedule order.
pub static FIGHTER_VERSES: [VerseReference; VERSE_COUNT as usize] = [
    // Set 1
    VerseReference::new("God's Sovereignty", "Psalm 115:3"),
    VerseReference::new("God's Word", "Psalm 119:11"),
    VerseReference::new("Prayer", "Philippians 4:6-7"),
    VerseReference::new("Salvation", "Ephesians 2:8-9"),
    VerseReference::new("Trust", "Proverbs 3:5-6"),
    VerseReference::new("Holiness", "1 Peter 1:14-16"),
    VerseReference::new("Love", "1 John 4:10"),
    VerseReference::new("Christ's Deity", "Colossians 1:15-16"),
    VerseReference::new("Faith", "Hebrews 11:6"),
    VerseReference::new("Forgiveness", "1 John 1:9"),
    VerseReference::new("Temptation", "1 Corinthians 10:13"),
    VerseReference::new("Contentment", "Hebrews 13:5"),
    VerseReference::new("Suffering", "Romans 8:18"),
    VerseReference::new("God's Faithfulness", "Lamentations 3:22-23"),
    VerseReference::new("Worship", "Psalm 95:6-7"),
    VerseReference::new("The Gospel", "1 Corinthians 15:3-4"),
    VerseReference::new("Obedience", "John 14:15"),
    VerseReference::new("Anxiety", "1 Peter 5:6-7"),
    VerseReference::new("Humility", "James 4:10"),
    VerseReference::new("God's Provision", "Philippians 4:19"),
    VerseReference::new("Christ's Return", "1 Thessalonians 4:16-17"),
    VerseReference::new("New Life", "2 Corinthians 5:17"),
    VerseReference::new("Assurance", "Romans 8:1"),
    VerseReference::new("Pride", "Proverbs 16:18"),
    VerseReference::new("Joy", "Psalm 16:11"),
    VerseReference::new("The Cross", "Galatians 2:20"),
    VerseReference::new("God's Love", "Romans 5:8"),
    VerseReference::new("Fear", "Isaiah 41:10"),
    VerseReference::new("Speech", "Ephesians 4:29"),
    VerseReference::new("Evangelism", "Romans 1:16"),
    VerseReference::new("Perseverance", "Galatians 6:9"),
    VerseReference::new("Scripture", "2 Timothy 3:16-17"),
    VerseReference::new("Grace", "Titus 2:11-12"),
    VerseReference::new("Peace", "John 14:27"),
    VerseReference::new("The Holy Spirit", "Galatians 5:22-23"),
    VerseReference::new("God's Power", "Jeremiah 32:17"),
    VerseReference::new("Wisdom", "James 1:5"),
    VerseReference::new("Sin", "Romans 3:23"),
    VerseReference::new("Hope", "Romans 15:13"),
    VerseReference::new("Service", "Mark 10:45"),
    VerseReference::new("Thankfulness", "1 Thessalonians 5:16-18"),
    VerseReference::new("Christ's Sufficiency", "2 Corinthians 12:9"),
    VerseReference::new("God's Presence", "Psalm 139:7-8"),
    VerseReference::new("Lust", "Matthew 5:28"),
    VerseReference::new("Eternal Life", "John 3:16"),
    VerseReference::new("Strength", "Isaiah 40:31"),
    VerseReference::new("Church", "Hebrews 10:24-25"),
    VerseReference::new("Righteousness", "2 Corinthians 5:21"),
    VerseReference::new("Giving", "2 Corinthians 9:7"),
    VerseReference::new("Mercy", "Micah 7:18"),
    VerseReference::new("Jesus the Way", "John 14:6"),
    VerseReference::new("Christmas", "Isaiah 9:6"),
    // Set 2
    VerseReference::new("God's Sovereignty", "Isaiah 46:9-10"),
    VerseReference::new("God's Word", "Psalm 19:7-8"),
    VerseReference::new("Prayer", "Matthew 7:7-8"),
    VerseReference::new("Salvation", "Romans 10:9-10"),
    VerseReference::new("Trust", "Psalm 56:3-4"),
    VerseReference::new("Holiness", "Hebrews 12:14"),
    VerseReference::new("Love", "John 13:34-35"),
    VerseReference::new("Christ's Deity", "John 1:1-3"),
    VerseReference::new("Faith", "Romans 10:17"),
    VerseReference::new("Forgiveness", "Ephesians 4:32"),
    VerseReference::new("Temptation", "James 1:13-14"),
    VerseReference::new("Contentment", "1 Timothy 6:6-8"),
    VerseReference::new("Suffering", "2 Corinthians 4:17-18"),
    VerseReference::new("God's Faithfulness", "Deuteronomy 7:9"),
    VerseReference::new("Worship", "Psalm 29:1-2"),
    VerseReference::new("The Gospel", "Romans 1:16-17"),
    VerseReference::new("Obedience", "1 Samuel 15:22"),
    VerseReference::new("Anxiety", "Matthew 6:33-34"),
    VerseReference::new("Humility", "Philippians 2:3-4"),
    VerseReference::new("God's Provision", "Matthew 6:31-32"),
    VerseReference::new("Christ's Return", "Titus 2:13"),
    VerseReference::new("New Life", "Romans 6:4"),
    VerseReference::new("Assurance", "John 10:27-28"),
    VerseReference::new("Pride", "1 Peter 5:5"),
    VerseReference::new("Joy", "Nehemiah 8:10"),
    VerseReference::new("The Cross", "1 Peter 2:24"),
    VerseReference::new("God's Love", "1 John 3:1"),
    VerseReference::new("Fear", "Psalm 27:1"),
    VerseReference::new("Speech", "Proverbs 15:1"),
    VerseReference::new("Evangelism", "Matthew 28:19-20"),
    VerseReference::new("Perseverance", "Hebrews 12:1-2"),
    VerseReference::new("Scripture", "Hebrews 4:12"),
    VerseReference::new("Grace", "Romans 5:20-21"),
    VerseReference::new("Peace", "Isaiah 26:3"),
    VerseReference::new("The Holy Spirit", "Romans 8:26"),
    VerseReference::new("God's Power", "Ephesians 3:20-21"),
    VerseReference::new("Wisdom", "Proverbs 9:10"),
    VerseReference::new("Sin", "Psalm 51:1-2"),
    VerseReference::new("Hope", "Lamentations 3:24-25"),
    VerseReference::new("Service", "Galatians 5:13"),
    VerseReference::new("Thankfulness", "Psalm 100:4-5"),
    VerseReference::new("Christ's Sufficiency", "Colossians 2:9-10"),
    VerseReference::new("God's Presence", "Psalm 46:1-2"),
    VerseReference::new("Lust", "1 Thessalonians 4:3-5"),
    VerseReference::new("Eternal Life", "John 17:3"),
    VerseReference::new("Strength", "Philippians 4:13"),
    VerseReference::new("Church", "Ephesians 4:15-16"),
    VerseReference::new("Righteousness", "Philippians 3:8-9"),
    VerseReference::new("Giving", "Acts 20:35"),
    VerseReference::new("Mercy", "Lamentations 3:31-33"),
    VerseReference::new("Jesus the Way", "Acts 4:12"),
    VerseReference::new("Christmas", "Luke 2:10-11"),
    // Set 3
    VerseReference::new("God's Sovereignty", "Daniel 4:34-35"),
    VerseReference::new("God's Word", "Isaiah 40:8"),
    VerseReference::new("Prayer", "1 John 5:14-15"),
    VerseReference::new("Salvation", "Titus 3:4-5"),
    VerseReference::new("Trust", "Psalm 37:3-5"),
    VerseReference::new("Holiness", "Romans 12:1-2"),
    VerseReference::new("Love", "1 Corinthians 13:4-7"),
    VerseReference::new("Christ's Deity", "Hebrews 1:3"),
    VerseReference::new("Faith", "Hebrews 11:1"),
    VerseReference::new("Forgiveness", "Psalm 103:11-12"),
    VerseReference::new("Temptation", "Hebrews 4:15-16"),
    VerseReference::new("Contentment", "Philippians 4:11-12"),
    VerseReference::new("Suffering", "James 1:2-4"),
    VerseReference::new("God's Faithfulness", "2 Timothy 2:13"),
    VerseReference::new("Worship", "Romans 11:33-36"),
    VerseReference::new("The Gospel", "Isaiah 53:5-6"),
    VerseReference::new("Obedience", "James 1:22"),
    VerseReference::new("Anxiety", "Psalm 94:19"),
    VerseReference::new("Humility", "Micah 6:8"),
    VerseReference::new("God's Provision", "Psalm 23:1-3"),
    VerseReference::new("Christ's Return", "Revelation 22:12-13"),
    VerseReference::new("New Life", "Ezekiel 36:26-27"),
    VerseReference::new("Assurance", "Philippians 1:6"),
    VerseReference::new("Pride", "Jeremiah 9:23-24"),
    VerseReference::new("Joy", "Habakkuk 3:17-18"),
    VerseReference::new("The Cross", "Colossians 2:13-14"),
    VerseReference::new("God's Love", "Zephaniah 3:17"),
    VerseReference::new("Fear", "Psalm 46:10"),
    VerseReference::new("Speech", "James 3:9-10"),
    VerseReference::new("Evangelism", "Isaiah 52:7"),
    VerseReference::new("Perseverance", "2 Timothy 4:7-8"),
    VerseReference::new("Scripture", "Psalm 119:105"),
    VerseReference::new("Grace", "2 Corinthians 8:9"),
    VerseReference::new("Peace", "Romans 5:1"),
    VerseReference::new("The Holy Spirit", "John 16:13"),
    VerseReference::new("God's Power", "Psalm 62:11-12"),
    VerseReference::new("Wisdom", "Colossians 3:16"),
    VerseReference::new("Sin", "Isaiah 59:1-2"),
    VerseReference::new("Hope", "Hebrews 6:19-20"),
    VerseReference::new("Service", "1 Peter 4:10"),
    VerseReference::new("Thankfulness", "Colossians 3:17"),
    VerseReference::new("Christ's Sufficiency", "John 6:35"),
    VerseReference::new("God's Presence", "Deuteronomy 31:8"),
    VerseReference::new("Lust", "Job 31:1"),
    VerseReference::new("Eternal Life", "Romans 6:23"),
    VerseReference::new("Strength", "Psalm 73:26"),
    VerseReference::new("Church", "Acts 2:42"),
    VerseReference::new("Righteousness", "Romans 3:21-22"),
    VerseReference::new("Giving", "Luke 6:38"),
    VerseReference::new("Mercy", "Psalm 103:8"),
    VerseReference::new("Jesus the Way", "1 Timothy 2:5-6"),
    VerseReference::new("Christmas", "Matthew 1:21"),
    // Set 4
    VerseReference::new("God's Sovereignty", "Proverbs 21:1"),
    VerseReference::new("God's Word", "2 Peter 1:20-21"),
    VerseReference::new("Prayer", "James 5:16"),
    VerseReference::new("Salvation", "John 1:12-13"),
    VerseReference::new("Trust", "Isaiah 26:4"),
    VerseReference::new("Holiness", "2 Corinthians 7:1"),
    VerseReference::new("Love", "Romans 13:8"),
    VerseReference::new("Christ's Deity", "Philippians 2:5-7"),
    VerseReference::new("Faith", "Habakkuk 2:4"),
    VerseReference::new("Forgiveness", "Matthew 6:14-15"),
    VerseReference::new("Temptation", "Matthew 26:41"),
    VerseReference::new("Contentment", "Psalm 73:25"),
    VerseReference::new("Suffering", "1 Peter 4:12-13"),
    VerseReference::new("God's Faithfulness", "Psalm 36:5"),
    VerseReference::new("Worship", "Revelation 4:11"),
    VerseReference::new("The Gospel", "2 Corinthians 5:20-21"),
    VerseReference::new("Obedience", "Luke 6:46"),
    VerseReference::new("Anxiety", "Psalm 55:22"),
    VerseReference::new("Humility", "Proverbs 11:2"),
    VerseReference::new("God's Provision", "Psalm 84:11"),
    VerseReference::new("Christ's Return", "Acts 1:11"),
    VerseReference::new("New Life", "Colossians 3:1-3"),
    VerseReference::new("Assurance", "Romans 8:38-39"),
    VerseReference::new("Pride", "Proverbs 8:13"),
    VerseReference::new("Joy", "John 15:11"),
    VerseReference::new("The Cross", "Hebrews 9:27-28"),
    VerseReference::new("God's Love", "Jeremiah 31:3"),
    VerseReference::new("Fear", "2 Timothy 1:7"),
    VerseReference::new("Speech", "Colossians 4:6"),
    VerseReference::new("Evangelism", "1 Peter 3:15"),
    VerseReference::new("Perseverance", "James 1:12"),
    VerseReference::new("Scripture", "Joshua 1:8"),
    VerseReference::new("Grace", "Ephesians 2:4-5"),
    VerseReference::new("Peace", "Colossians 3:15"),
    VerseReference::new("The Holy Spirit", "John 14:26"),
    VerseReference::new("God's Power", "Isaiah 40:28-29"),
    VerseReference::new("Wisdom", "Proverbs 2:6"),
    VerseReference::new("Sin", "James 4:17"),
    VerseReference::new("Hope", "1 Peter 1:3"),
    VerseReference::new("Service", "Matthew 20:26-28"),
    VerseReference::new("Thankfulness", "Psalm 107:1"),
    VerseReference::new("Christ's Sufficiency", "John 15:5"),
    VerseReference::new("God's Presence", "Matthew 28:20"),
    VerseReference::new("Lust", "2 Timothy 2:22"),
    VerseReference::new("Eternal Life", "1 John 5:11-12"),
    VerseReference::new("Strength", "Nehemiah 9:6"),
    VerseReference::new("Church", "1 Corinthians 12:12-13"),
    VerseReference::new("Righteousness", "Matthew 5:6"),
    VerseReference::new("Giving", "Malachi 3:10"),
    VerseReference::new("Mercy", "Hebrews 4:16"),
    VerseReference::new("Jesus the Way", "John 10:9"),
    VerseReference::new("Christmas", "Galatians 4:4-5"),
    // Set 5
    VerseReference::new("God's Sovereignty", "Psalm 135:6"),
    VerseReference::new("God's Word", "Matthew 4:4"),
    VerseReference::new("Prayer", "Colossians 4:2"),
    VerseReference::new("Salvation", "Acts 16:31"),
    VerseReference::new("Trust", "Jeremiah 17:7-8"),
    VerseReference::new("Holiness", "1 Thessalonians 5:23-24"),
    VerseReference::new("Love", "1 John 4:18-19"),
    VerseReference::new("Christ's Deity", "John 8:58"),
    VerseReference::new("Faith", "Galatians 3:11"),
    VerseReference::new("Forgiveness", "Colossians 3:13"),
    VerseReference::new("Temptation", "Ephesians 6:10-11"),
    VerseReference::new("Contentment", "Psalm 62:1-2"),
    VerseReference::new("Suffering", "Romans 5:3-5"),
    VerseReference::new("God's Faithfulness", "1 Corinthians 1:9"),
    VerseReference::new("Worship", "John 4:23-24"),
    VerseReference::new("The Gospel", "1 Timothy 1:15"),
    VerseReference::new("Obedience", "John 15:10"),
    VerseReference::new("Anxiety", "Psalm 121:1-2"),
    VerseReference::new("Humility", "Luke 14:11"),
    VerseReference::new("God's Provision", "2 Corinthians 9:8"),
    VerseReference::new("Christ's Return", "1 John 3:2-3"),
    VerseReference::new("New Life", "1 Peter 1:23"),
    VerseReference::new("Assurance", "1 John 5:13"),
    VerseReference::new("Pride", "Romans 12:3"),
    VerseReference::new("Joy", "Psalm 126:5-6"),
    VerseReference::new("The Cross", "Isaiah 53:10"),
    VerseReference::new("God's Love", "Ephesians 3:17-19"),
    VerseReference::new("Fear", "Proverbs 29:25"),
    VerseReference::new("Speech", "Psalm 141:3"),
    VerseReference::new("Evangelism", "Romans 10:14-15"),
    VerseReference::new("Perseverance", "Philippians 3:13-14"),
    VerseReference::new("Scripture", "Psalm 119:97"),
    VerseReference::new("Grace", "John 1:16-17"),
    VerseReference::new("Peace", "Psalm 4:8"),
    VerseReference::new("The Holy Spirit", "Ephesians 1:13-14"),
    VerseReference::new("God's Power", "Psalm 33:8-9"),
    VerseReference::new("Wisdom", "Psalm 90:12"),
    VerseReference::new("Sin", "Romans 6:12-13"),
    VerseReference::new("Hope", "Romans 8:24-25"),
    VerseReference::new("Service", "Colossians 3:23-24"),
    VerseReference::new("Thankfulness", "Psalm 9:1-2"),
    VerseReference::new("Christ's Sufficiency", "Hebrews 7:25"),
    VerseReference::new("God's Presence", "Psalm 16:8"),
    VerseReference::new("Lust", "Galatians 5:16"),
    VerseReference::new("Eternal Life", "John 11:25-26"),
    VerseReference::new("Strength", "Psalm 18:1-2"),
    VerseReference::new("Church", "Romans 12:4-5"),
    VerseReference::new("Righteousness", "Romans 4:5"),
    VerseReference::new("Giving", "Proverbs 3:9-10"),
    VerseReference::new("Mercy", "Titus 3:5"),
    VerseReference::new("Jesus the Way", "John 11:25"),
    VerseReference::new("Christmas", "John 1:14"),
];

/// Look up the schedule entry for an index.
pub fn lookup(index: u32) -> Option<&'static VerseReference> {
    FIGHTER_VERSES.get(index as usize)
}
