//! Static route block-time tables, in minutes, keyed by ordered origin/destination.
//!
//! Two tables live here. `SCHEDULE` backs the duration endpoint; `BLOCK_TIMES`
//! backs the flight generator. They overlap and disagree on some routes; each is
//! read only by the component named above.

/// `(origin, destination, min_minutes, max_minutes)`
pub(crate) type RouteRange = (&'static str, &'static str, u32, u32);

/// Published schedule ranges, including the transatlantic routes.
pub(crate) static SCHEDULE: &[RouteRange] = &[
    // JFK (New York) Routes
    ("JFK", "LAX", 330, 360),
    ("LAX", "JFK", 280, 310),
    ("JFK", "SFO", 360, 390),
    ("SFO", "JFK", 305, 335),
    ("JFK", "ORD", 150, 170),
    ("ORD", "JFK", 130, 150),
    ("JFK", "MIA", 180, 200),
    ("MIA", "JFK", 170, 190),
    ("JFK", "DFW", 225, 250),
    ("DFW", "JFK", 195, 220),
    ("JFK", "SEA", 345, 375),
    ("SEA", "JFK", 290, 320),
    ("JFK", "DEN", 255, 280),
    ("DEN", "JFK", 220, 245),
    ("JFK", "PHX", 300, 330),
    ("PHX", "JFK", 265, 295),
    ("JFK", "LAS", 315, 345),
    ("LAS", "JFK", 275, 305),
    ("JFK", "ATL", 130, 150),
    ("ATL", "JFK", 115, 135),
    ("JFK", "BOS", 55, 75),
    ("BOS", "JFK", 55, 75),
    ("JFK", "MSP", 195, 220),
    ("MSP", "JFK", 165, 190),
    ("JFK", "IAH", 230, 255),
    ("IAH", "JFK", 200, 225),

    // BOS (Boston) Routes
    ("BOS", "LAX", 360, 390),
    ("LAX", "BOS", 310, 340),
    ("BOS", "SFO", 370, 400),
    ("SFO", "BOS", 320, 350),
    ("BOS", "ORD", 155, 175),
    ("ORD", "BOS", 140, 160),
    ("BOS", "MIA", 195, 220),
    ("MIA", "BOS", 185, 210),
    ("BOS", "ATL", 155, 180),
    ("ATL", "BOS", 145, 170),
    ("BOS", "DFW", 240, 265),
    ("DFW", "BOS", 210, 235),
    ("BOS", "SEA", 355, 385),
    ("SEA", "BOS", 305, 335),
    ("BOS", "DEN", 265, 290),
    ("DEN", "BOS", 235, 260),

    // ATL (Atlanta) Routes
    ("ATL", "LAX", 255, 285),
    ("LAX", "ATL", 225, 255),
    ("ATL", "SFO", 280, 310),
    ("SFO", "ATL", 250, 280),
    ("ATL", "ORD", 105, 125),
    ("ORD", "ATL", 100, 120),
    ("ATL", "MIA", 100, 120),
    ("MIA", "ATL", 95, 115),
    ("ATL", "DFW", 135, 160),
    ("DFW", "ATL", 125, 150),
    ("ATL", "DEN", 195, 220),
    ("DEN", "ATL", 175, 200),
    ("ATL", "SEA", 285, 315),
    ("SEA", "ATL", 260, 290),
    ("ATL", "LAS", 245, 275),
    ("LAS", "ATL", 220, 250),
    ("ATL", "PHX", 225, 255),
    ("PHX", "ATL", 200, 230),

    // ORD (Chicago) Routes
    ("ORD", "LAX", 240, 270),
    ("LAX", "ORD", 210, 240),
    ("ORD", "SFO", 255, 285),
    ("SFO", "ORD", 230, 260),
    ("ORD", "MIA", 175, 200),
    ("MIA", "ORD", 175, 200),
    ("ORD", "DFW", 135, 160),
    ("DFW", "ORD", 125, 150),
    ("ORD", "DEN", 140, 165),
    ("DEN", "ORD", 125, 150),
    ("ORD", "SEA", 240, 270),
    ("SEA", "ORD", 225, 255),
    ("ORD", "LAS", 215, 245),
    ("LAS", "ORD", 195, 225),
    ("ORD", "PHX", 200, 230),
    ("PHX", "ORD", 185, 215),
    ("ORD", "MSP", 70, 90),
    ("MSP", "ORD", 65, 85),

    // DFW (Dallas) Routes
    ("DFW", "LAX", 185, 215),
    ("LAX", "DFW", 170, 200),
    ("DFW", "SFO", 210, 240),
    ("SFO", "DFW", 190, 220),
    ("DFW", "MIA", 160, 185),
    ("MIA", "DFW", 155, 180),
    ("DFW", "DEN", 115, 140),
    ("DEN", "DFW", 105, 130),
    ("DFW", "SEA", 235, 265),
    ("SEA", "DFW", 215, 245),
    ("DFW", "LAS", 170, 200),
    ("LAS", "DFW", 160, 190),
    ("DFW", "PHX", 140, 170),
    ("PHX", "DFW", 130, 160),

    // MIA (Miami) Routes
    ("MIA", "LAX", 295, 325),
    ("LAX", "MIA", 280, 310),
    ("MIA", "SFO", 325, 355),
    ("SFO", "MIA", 305, 335),
    ("MIA", "DEN", 230, 260),
    ("DEN", "MIA", 215, 245),
    ("MIA", "SEA", 340, 370),
    ("SEA", "MIA", 320, 350),
    ("MIA", "LAS", 280, 310),
    ("LAS", "MIA", 265, 295),
    ("MIA", "PHX", 255, 285),
    ("PHX", "MIA", 240, 270),

    // DEN (Denver) Routes
    ("DEN", "LAX", 145, 175),
    ("LAX", "DEN", 130, 160),
    ("DEN", "SFO", 150, 180),
    ("SFO", "DEN", 135, 165),
    ("DEN", "SEA", 155, 185),
    ("SEA", "DEN", 140, 170),
    ("DEN", "LAS", 100, 125),
    ("LAS", "DEN", 95, 120),
    ("DEN", "PHX", 105, 130),
    ("PHX", "DEN", 100, 125),
    ("DEN", "MSP", 120, 145),
    ("MSP", "DEN", 130, 155),

    // West Coast Routes
    ("LAX", "SFO", 70, 90),
    ("SFO", "LAX", 70, 90),
    ("LAX", "SEA", 155, 180),
    ("SEA", "LAX", 145, 170),
    ("LAX", "LAS", 55, 75),
    ("LAS", "LAX", 55, 75),
    ("LAX", "PHX", 65, 85),
    ("PHX", "LAX", 60, 80),
    ("LAX", "PDX", 140, 165),
    ("PDX", "LAX", 135, 160),
    ("LAX", "SAN", 45, 60),
    ("SAN", "LAX", 45, 60),
    ("SFO", "SEA", 115, 140),
    ("SEA", "SFO", 105, 130),
    ("SFO", "LAS", 80, 100),
    ("LAS", "SFO", 80, 100),
    ("SFO", "PHX", 100, 125),
    ("PHX", "SFO", 95, 120),
    ("SFO", "PDX", 95, 120),
    ("PDX", "SFO", 95, 120),
    ("SEA", "LAS", 155, 180),
    ("LAS", "SEA", 160, 185),
    ("SEA", "PHX", 175, 200),
    ("PHX", "SEA", 185, 210),
    ("SEA", "PDX", 50, 65),
    ("PDX", "SEA", 50, 65),
    ("LAS", "PHX", 55, 75),
    ("PHX", "LAS", 55, 75),

    // MSP (Minneapolis) Routes
    ("MSP", "LAX", 225, 255),
    ("LAX", "MSP", 200, 230),
    ("MSP", "SFO", 235, 265),
    ("SFO", "MSP", 210, 240),
    ("MSP", "SEA", 195, 225),
    ("SEA", "MSP", 180, 210),
    ("MSP", "PHX", 180, 210),
    ("PHX", "MSP", 170, 200),
    ("MSP", "LAS", 190, 220),
    ("LAS", "MSP", 180, 210),
    ("MSP", "MIA", 200, 230),
    ("MIA", "MSP", 195, 225),
    ("MSP", "ATL", 140, 165),
    ("ATL", "MSP", 135, 160),
    ("MSP", "DFW", 145, 170),
    ("DFW", "MSP", 140, 165),

    // IAH (Houston) Routes
    ("IAH", "LAX", 195, 225),
    ("LAX", "IAH", 180, 210),
    ("IAH", "SFO", 225, 255),
    ("SFO", "IAH", 205, 235),
    ("IAH", "ORD", 145, 170),
    ("ORD", "IAH", 155, 180),
    ("IAH", "MIA", 155, 180),
    ("MIA", "IAH", 150, 175),
    ("IAH", "DEN", 135, 160),
    ("DEN", "IAH", 125, 150),
    ("IAH", "SEA", 250, 280),
    ("SEA", "IAH", 235, 265),
    ("IAH", "ATL", 100, 125),
    ("ATL", "IAH", 100, 125),
    ("IAH", "LAS", 195, 225),
    ("LAS", "IAH", 180, 210),
    ("IAH", "PHX", 160, 190),
    ("PHX", "IAH", 150, 180),

    // Transatlantic Routes
    ("JFK", "LHR", 420, 450),
    ("LHR", "JFK", 480, 510),
    ("JFK", "CDG", 435, 465),
    ("CDG", "JFK", 495, 525),
    ("JFK", "FCO", 510, 540),
    ("FCO", "JFK", 570, 600),
    ("BOS", "LHR", 390, 420),
    ("LHR", "BOS", 450, 480),
    ("LAX", "LHR", 600, 630),
    ("LHR", "LAX", 660, 690),
    ("MIA", "LHR", 510, 540),
    ("LHR", "MIA", 570, 600),
    ("ORD", "LHR", 450, 480),
    ("LHR", "ORD", 510, 540),
    ("ATL", "LHR", 480, 510),
    ("LHR", "ATL", 540, 570),
];

/// Block times the generator draws from when no caller estimate is supplied.
pub(crate) static BLOCK_TIMES: &[RouteRange] = &[
    // JFK routes
    ("JFK", "LAX", 370, 400),
    ("LAX", "JFK", 310, 340),
    ("JFK", "SFO", 360, 390),
    ("SFO", "JFK", 300, 330),
    ("JFK", "ORD", 150, 170),
    ("ORD", "JFK", 140, 160),
    ("JFK", "MIA", 185, 210),
    ("MIA", "JFK", 175, 200),
    ("JFK", "DFW", 200, 225),
    ("DFW", "JFK", 190, 215),
    ("JFK", "SEA", 315, 345),
    ("SEA", "JFK", 280, 310),
    ("JFK", "DEN", 220, 250),
    ("DEN", "JFK", 210, 240),
    ("JFK", "PHX", 265, 295),
    ("PHX", "JFK", 250, 280),
    ("JFK", "LAS", 280, 310),
    ("LAS", "JFK", 260, 290),
    ("JFK", "ATL", 130, 150),
    ("ATL", "JFK", 120, 140),
    ("JFK", "BOS", 70, 90),
    ("BOS", "JFK", 65, 85),

    // BOS routes
    ("BOS", "LAX", 375, 405),
    ("LAX", "BOS", 320, 350),
    ("BOS", "SFO", 365, 395),
    ("SFO", "BOS", 310, 340),
    ("BOS", "ORD", 150, 175),
    ("ORD", "BOS", 140, 165),
    ("BOS", "MIA", 195, 220),
    ("MIA", "BOS", 185, 210),
    ("BOS", "ATL", 155, 180),
    ("ATL", "BOS", 145, 170),

    // ATL routes
    ("ATL", "LAX", 245, 275),
    ("LAX", "ATL", 230, 260),
    ("ATL", "SFO", 270, 300),
    ("SFO", "ATL", 255, 285),
    ("ATL", "ORD", 115, 135),
    ("ORD", "ATL", 105, 125),
    ("ATL", "MIA", 105, 125),
    ("MIA", "ATL", 100, 120),
    ("ATL", "DFW", 140, 165),
    ("DFW", "ATL", 130, 155),
    ("ATL", "DEN", 195, 220),
    ("DEN", "ATL", 180, 205),
    ("ATL", "SEA", 280, 310),
    ("SEA", "ATL", 265, 295),

    // ORD routes
    ("ORD", "LAX", 260, 290),
    ("LAX", "ORD", 230, 260),
    ("ORD", "SFO", 255, 285),
    ("SFO", "ORD", 230, 260),
    ("ORD", "MIA", 175, 200),
    ("MIA", "ORD", 165, 190),
    ("ORD", "DFW", 145, 170),
    ("DFW", "ORD", 135, 160),
    ("ORD", "DEN", 145, 170),
    ("DEN", "ORD", 135, 160),
    ("ORD", "SEA", 240, 270),
    ("SEA", "ORD", 225, 255),
    ("ORD", "LAS", 220, 250),
    ("LAS", "ORD", 200, 230),
    ("ORD", "PHX", 205, 235),
    ("PHX", "ORD", 190, 220),

    // DFW routes
    ("DFW", "LAX", 185, 215),
    ("LAX", "DFW", 175, 205),
    ("DFW", "SFO", 210, 240),
    ("SFO", "DFW", 195, 225),
    ("DFW", "MIA", 160, 185),
    ("MIA", "DFW", 150, 175),
    ("DFW", "DEN", 115, 140),
    ("DEN", "DFW", 105, 130),
    ("DFW", "SEA", 230, 260),
    ("SEA", "DFW", 215, 245),
    ("DFW", "LAS", 170, 200),
    ("LAS", "DFW", 160, 190),
    ("DFW", "PHX", 145, 175),
    ("PHX", "DFW", 135, 165),

    // MIA routes
    ("MIA", "LAX", 295, 325),
    ("LAX", "MIA", 280, 310),
    ("MIA", "SFO", 325, 355),
    ("SFO", "MIA", 310, 340),
    ("MIA", "DEN", 230, 260),
    ("DEN", "MIA", 215, 245),
    ("MIA", "SEA", 340, 370),
    ("SEA", "MIA", 325, 355),
    ("MIA", "LAS", 280, 310),
    ("LAS", "MIA", 265, 295),
    ("MIA", "PHX", 255, 285),
    ("PHX", "MIA", 240, 270),

    // DEN routes
    ("DEN", "LAX", 145, 175),
    ("LAX", "DEN", 135, 165),
    ("DEN", "SFO", 150, 180),
    ("SFO", "DEN", 140, 170),
    ("DEN", "SEA", 155, 185),
    ("SEA", "DEN", 145, 175),
    ("DEN", "LAS", 100, 125),
    ("LAS", "DEN", 95, 120),
    ("DEN", "PHX", 105, 130),
    ("PHX", "DEN", 100, 125),

    // West Coast routes
    ("LAX", "SFO", 75, 95),
    ("SFO", "LAX", 70, 90),
    ("LAX", "SEA", 155, 185),
    ("SEA", "LAX", 145, 175),
    ("LAX", "LAS", 55, 75),
    ("LAS", "LAX", 50, 70),
    ("LAX", "PHX", 65, 85),
    ("PHX", "LAX", 60, 80),
    ("SFO", "SEA", 115, 140),
    ("SEA", "SFO", 105, 130),
    ("SFO", "LAS", 80, 100),
    ("LAS", "SFO", 75, 95),
    ("SFO", "PHX", 100, 125),
    ("PHX", "SFO", 95, 120),
    ("SEA", "LAS", 145, 175),
    ("LAS", "SEA", 155, 185),
    ("SEA", "PHX", 165, 195),
    ("PHX", "SEA", 175, 205),
    ("LAS", "PHX", 55, 75),
    ("PHX", "LAS", 50, 70),

    // MSP routes
    ("MSP", "JFK", 155, 180),
    ("JFK", "MSP", 165, 190),
    ("MSP", "LAX", 220, 250),
    ("LAX", "MSP", 200, 230),
    ("MSP", "ORD", 75, 95),
    ("ORD", "MSP", 70, 90),
    ("MSP", "DEN", 115, 140),
    ("DEN", "MSP", 105, 130),
    ("MSP", "SEA", 195, 225),
    ("SEA", "MSP", 180, 210),

    // IAH routes
    ("IAH", "JFK", 200, 225),
    ("JFK", "IAH", 220, 245),
    ("IAH", "LAX", 195, 225),
    ("LAX", "IAH", 180, 210),
    ("IAH", "ORD", 145, 170),
    ("ORD", "IAH", 155, 180),
    ("IAH", "MIA", 155, 180),
    ("MIA", "IAH", 145, 170),
    ("IAH", "DEN", 135, 160),
    ("DEN", "IAH", 125, 150),
    ("IAH", "SEA", 240, 270),
    ("SEA", "IAH", 225, 255),
];
