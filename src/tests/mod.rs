mod collect_in_section_cases;
